//! NullDiagnostics - 丢弃一切的空日志
//!
//! 供不需要收集诊断的组件注入，与真实日志共享同一能力面。
//! 无状态，按值构造即可，不走全局单例

use crate::catalog::Diagnostic;
use crate::messages::{DiagnosticLog, DiagnosticRange};
use crate::source::{Node, SourceFile};

/// 空日志：报告全部丢弃，查询全部给空
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl<'a> DiagnosticLog<'a> for NullDiagnostics {
    fn set_source_file(&mut self, _file: &'a SourceFile) {}

    fn report(&mut self, _pos: usize, _descriptor: &'static Diagnostic, _args: &[&str]) {}

    fn report_node(
        &mut self,
        _node: Option<&'a dyn Node>,
        _descriptor: &'static Diagnostic,
        _args: &[&str],
    ) {
    }

    fn count(&self) -> usize {
        0
    }

    fn diagnostic(&self, _index: usize) -> Option<&'static Diagnostic> {
        None
    }

    fn arguments(&self, _index: usize) -> Option<&[String]> {
        None
    }

    fn node(&self, _index: usize) -> Option<&'a dyn Node> {
        None
    }

    fn position(&self, _index: usize) -> Option<usize> {
        None
    }

    fn source_file(&self, _index: usize) -> Option<&'a SourceFile> {
        None
    }

    fn range(&self, _index: usize) -> Option<DiagnosticRange> {
        None
    }

    fn message(&self, _index: usize, _detailed: bool) -> Option<String> {
        None
    }

    fn for_each(&self, _f: &mut dyn FnMut(&str, usize)) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_reports_are_dropped() {
        let file = SourceFile::new("tokens.gm", "rule A;\n");
        let span = 0..4;
        let mut log = NullDiagnostics;

        log.set_source_file(&file);
        log.report(0, &catalog::EXPECTED, &["Identifier"]);
        log.report_node(Some(&span), &catalog::UNREFERENCED_RULE, &["A"]);

        assert_eq!(log.count(), 0);
        assert!(log.diagnostic(0).is_none());
        assert!(log.arguments(0).is_none());
        assert!(log.source_file(0).is_none());
        assert!(log.message(0, true).is_none());
    }

    #[test]
    fn test_for_each_never_calls_back() {
        let mut log = NullDiagnostics;
        log.report(0, &catalog::UNTERMINATED_STRING, &[]);

        let mut calls = 0;
        log.for_each(&mut |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_usable_behind_trait_object() {
        fn run<'a>(log: &mut dyn DiagnosticLog<'a>) {
            log.report(0, &catalog::UNTERMINATED_STRING, &[]);
        }

        let mut null = NullDiagnostics;
        run(&mut null);
        assert_eq!(null.count(), 0);
    }
}
