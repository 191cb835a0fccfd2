//! Severity - 诊断级别
//!
//! 语法定义编译器只区分错误与警告两级

use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 错误 - 阻止编译
    Error,
    /// 警告 - 不阻止编译但应注意
    Warning,
}

impl Severity {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
        }
    }

    /// 是否为错误
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
