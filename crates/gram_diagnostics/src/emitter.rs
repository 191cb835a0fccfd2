//! Emitter - 诊断输出器
//!
//! 把日志里的诊断逐条打印到终端，可选着色。
//! 详细格式本身由日志渲染，这里只负责输出与上色

use crate::messages::DiagnosticLog;
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 按插入顺序输出日志中的全部诊断
    pub fn emit_all<'a>(&self, log: &dyn DiagnosticLog<'a>) {
        log.for_each(&mut |message, _index| {
            println!("{}", self.render(message));
        });
    }

    /// 给固定格式 "<文件>(<行>,<列>): <级别> GM<code>: <消息>"
    /// 里的级别词上色；其余内容原样保留
    fn render(&self, message: &str) -> String {
        if !self.use_colors {
            return message.to_string();
        }
        if let Some(at) = message.find(": error ") {
            format!(
                "{}: {} {}",
                &message[..at],
                "error".red().bold(),
                &message[at + ": error ".len()..]
            )
        } else if let Some(at) = message.find(": warning ") {
            format!(
                "{}: {} {}",
                &message[..at],
                "warning".yellow().bold(),
                &message[at + ": warning ".len()..]
            )
        } else {
            message.to_string()
        }
    }
}
