//! 诊断目录 - 消息描述符表
//!
//! 进程级不变的消息模板。数字码对外稳定，是调用方可见的标识，
//! 不得跨版本重新编号；0 保留给从不单独展示的内部组合模板

use crate::severity::Severity;

/// 诊断描述符
#[derive(Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 数字码（渲染为 GM<code>）
    pub code: u32,
    /// 消息模板，{0} {1} … 为参数占位符
    pub message: &'static str,
    /// 级别
    pub severity: Severity,
}

// --- 内部组合模板 (code 0) ---

/// 两项列表："A or B"
pub static TWO_ITEM_LIST: Diagnostic = Diagnostic {
    code: 0,
    message: "{0} or {1}",
    severity: Severity::Error,
};

/// 多项列表的前导项
pub static LEADING_LIST_ITEM: Diagnostic = Diagnostic {
    code: 0,
    message: "{0}, ",
    severity: Severity::Error,
};

/// 多项列表的末项
pub static FINAL_LIST_ITEM: Diagnostic = Diagnostic {
    code: 0,
    message: "or {0}",
    severity: Severity::Error,
};

// --- 词法 / 语法错误 (1000+) ---

pub static EXPECTED: Diagnostic = Diagnostic {
    code: 1000,
    message: "{0} expected.",
    severity: Severity::Error,
};

pub static UNEXPECTED_CHARACTER: Diagnostic = Diagnostic {
    code: 1001,
    message: "Unexpected character '{0}'.",
    severity: Severity::Error,
};

pub static UNTERMINATED_STRING: Diagnostic = Diagnostic {
    code: 1002,
    message: "Unterminated string constant.",
    severity: Severity::Error,
};

pub static UNRECOGNIZED_ESCAPE: Diagnostic = Diagnostic {
    code: 1003,
    message: "Unrecognized escape sequence.",
    severity: Severity::Error,
};

pub static UNTERMINATED_COMMENT: Diagnostic = Diagnostic {
    code: 1004,
    message: "Unterminated comment.",
    severity: Severity::Error,
};

// --- 绑定 / 检查错误 (1100+) ---

pub static DUPLICATE_DEFINITION: Diagnostic = Diagnostic {
    code: 1100,
    message: "Duplicate definition of '{0}'.",
    severity: Severity::Error,
};

pub static UNDEFINED_SYMBOL: Diagnostic = Diagnostic {
    code: 1101,
    message: "'{0}' is not defined.",
    severity: Severity::Error,
};

pub static MISSING_PRODUCTION: Diagnostic = Diagnostic {
    code: 1102,
    message: "Rule '{0}' must declare at least one production.",
    severity: Severity::Error,
};

pub static LEFT_RECURSION: Diagnostic = Diagnostic {
    code: 1103,
    message: "Rule '{0}' is left-recursive.",
    severity: Severity::Error,
};

pub static CIRCULAR_DEFINITION: Diagnostic = Diagnostic {
    code: 1104,
    message: "Circular definition involving '{0}' and '{1}'.",
    severity: Severity::Error,
};

pub static WRONG_ARGUMENT_COUNT: Diagnostic = Diagnostic {
    code: 1105,
    message: "Expected {0} arguments, but found {1}.",
    severity: Severity::Error,
};

// --- 警告 (2000+) ---

pub static UNREFERENCED_RULE: Diagnostic = Diagnostic {
    code: 2000,
    message: "Rule '{0}' is never referenced.",
    severity: Severity::Warning,
};

pub static AMBIGUOUS_ALTERNATIVES: Diagnostic = Diagnostic {
    code: 2001,
    message: "Alternatives '{0}' and '{1}' are ambiguous.",
    severity: Severity::Warning,
};

pub static SHADOWED_TERMINAL: Diagnostic = Diagnostic {
    code: 2002,
    message: "Terminal '{0}' shadows an earlier definition.",
    severity: Severity::Warning,
};

/// 按登记顺序排列的完整目录，便于审计与测试
pub static CATALOG: &[&Diagnostic] = &[
    &TWO_ITEM_LIST,
    &LEADING_LIST_ITEM,
    &FINAL_LIST_ITEM,
    &EXPECTED,
    &UNEXPECTED_CHARACTER,
    &UNTERMINATED_STRING,
    &UNRECOGNIZED_ESCAPE,
    &UNTERMINATED_COMMENT,
    &DUPLICATE_DEFINITION,
    &UNDEFINED_SYMBOL,
    &MISSING_PRODUCTION,
    &LEFT_RECURSION,
    &CIRCULAR_DEFINITION,
    &WRONG_ARGUMENT_COUNT,
    &UNREFERENCED_RULE,
    &AMBIGUOUS_ALTERNATIVES,
    &SHADOWED_TERMINAL,
];
