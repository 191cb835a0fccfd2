//! Gram Diagnostics
//!
//! 语法定义编译器的统一诊断系统：按报告顺序记录跨多个源文件的
//! 错误与警告，并渲染为 `文件(行,列)` 前缀的人类可读文本。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] / [`catalog`] - 不可变的消息描述符表
//! - [`DiagnosticMessages`] - 追加式诊断日志
//! - [`DiagnosticLog`] - 日志能力面（组件按此注入依赖）
//! - [`NullDiagnostics`] - 丢弃诊断的空日志
//! - [`LineMap`] - 偏移与行/列的双向映射
//! - [`Emitter`] - 终端输出器
//!
//! # 并发模型
//!
//! 全部单线程同步：日志单写者，LineMap 每文件惰性构建一次。
//! 同线程内渲染与追加可以交错，已写入的下标永不收回。
//!
//! # 示例
//!
//! ```rust
//! use gram_diagnostics::{catalog, DiagnosticLog, DiagnosticMessages, SourceFile};
//!
//! let grammar = SourceFile::new("tokens.gm", "rule A ::= B;\n");
//! let mut log = DiagnosticMessages::new();
//!
//! log.set_source_file(&grammar);
//! log.report(11, &catalog::UNDEFINED_SYMBOL, &["B"]);
//!
//! log.for_each(&mut |message, _index| {
//!     assert_eq!(message, "tokens.gm(1,12): error GM1101: 'B' is not defined.");
//! });
//! ```

pub mod catalog;
pub mod emitter;
pub mod format;
pub mod line_map;
pub mod messages;
pub mod null;
pub mod severity;
pub mod source;

// 重新导出核心类型
pub use catalog::Diagnostic;
pub use emitter::Emitter;
pub use format::{format_list, format_string, ListItem};
pub use line_map::{LineAndCharacter, LineMap};
pub use messages::{
    DiagnosticInfo, DiagnosticLog, DiagnosticMessages, DiagnosticRange, InfoOptions,
};
pub use null::NullDiagnostics;
pub use severity::Severity;
pub use source::{Node, SourceFile};
