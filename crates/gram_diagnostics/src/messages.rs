//! DiagnosticMessages - 诊断日志
//!
//! 按报告顺序保存编译期间的全部诊断，并提供查询与渲染。
//! 日志只借用源文件与语法节点，二者由编译驱动持有，
//! 生命周期必须覆盖所有通过日志读取它们的调用。

use crate::catalog::Diagnostic;
use crate::format::format_string;
use crate::line_map::LineAndCharacter;
use crate::source::{Node, SourceFile};

/// 单条日志条目
///
/// 位置、节点、参数均为可选；条目写入后不再变化，
/// 以零基插入下标作为对外唯一句柄
struct Entry<'a> {
    descriptor: &'static Diagnostic,
    arguments: Option<Vec<String>>,
    position: Option<usize>,
    node: Option<&'a dyn Node>,
}

/// 源文件归属记录：自 first_index 起的诊断属于 file
struct FileRecord<'a> {
    file: &'a SourceFile,
    first_index: usize,
}

/// 诊断的行/列范围（零基）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticRange {
    pub start: LineAndCharacter,
    pub end: LineAndCharacter,
}

/// 快照视图选项
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoOptions {
    /// 是否一并渲染详细消息
    pub format_message: bool,
}

/// 单条诊断的快照视图
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    /// 插入下标
    pub index: usize,
    /// 描述符
    pub descriptor: &'static Diagnostic,
    /// 报告时携带的参数
    pub arguments: Option<Vec<String>>,
    /// 原始偏移
    pub position: Option<usize>,
    /// 行/列范围
    pub range: DiagnosticRange,
    /// 归属文件名
    pub filename: Option<String>,
    /// 渲染好的详细消息（仅在 format_message 时填充）
    pub message: Option<String>,
}

/// 诊断日志的能力面
///
/// 组件通过它报告与查询诊断，不关心对端是真实日志
/// 还是 [`NullDiagnostics`](crate::null::NullDiagnostics)。
/// 所有查询都是全函数：下标越界或字段缺失一律给出
/// None / 空值，从不 panic
pub trait DiagnosticLog<'a> {
    /// 登记当前处理的源文件，其后报告的诊断归属于它
    ///
    /// 同一文件可以重复登记；两次登记之间也允许没有任何诊断
    fn set_source_file(&mut self, file: &'a SourceFile);

    /// 报告一条带绝对偏移的诊断
    ///
    /// pos 是绝对字符偏移（不是字节偏移），
    /// 与 [`LineMap`](crate::line_map::LineMap) 的单位一致
    fn report(&mut self, pos: usize, descriptor: &'static Diagnostic, args: &[&str]);

    /// 报告一条挂在语法节点上的诊断
    ///
    /// 有节点时位置取节点起点；无节点时位置留空。
    /// 参数个数与模板占位符不匹配不是错误
    fn report_node(
        &mut self,
        node: Option<&'a dyn Node>,
        descriptor: &'static Diagnostic,
        args: &[&str],
    );

    /// 当前条目数
    fn count(&self) -> usize;

    /// 条目的描述符
    fn diagnostic(&self, index: usize) -> Option<&'static Diagnostic>;

    /// 条目的参数
    fn arguments(&self, index: usize) -> Option<&[String]>;

    /// 条目的节点
    fn node(&self, index: usize) -> Option<&'a dyn Node>;

    /// 条目的原始偏移
    fn position(&self, index: usize) -> Option<usize>;

    /// 条目归属的源文件
    fn source_file(&self, index: usize) -> Option<&'a SourceFile>;

    /// 条目的行/列范围
    ///
    /// 有节点时取节点起止，否则起止都取原始偏移；
    /// 无法归属文件时退化为 `{line: 0, character: 偏移}`
    fn range(&self, index: usize) -> Option<DiagnosticRange>;

    /// 渲染一条诊断
    ///
    /// detailed 为真时输出固定格式
    /// `<文件>(<行>,<列>): <error|warning> GM<code>: <消息>`；
    /// 为假时只输出替换好参数的消息体
    fn message(&self, index: usize, detailed: bool) -> Option<String>;

    /// 按插入顺序遍历，回调参数为详细渲染消息与下标
    fn for_each(&self, f: &mut dyn FnMut(&str, usize));
}

/// 追加式诊断日志
///
/// 状态机：空 → 累积 →（随时可读）；渲染与追加可以交错进行，
/// 已写入的下标永不收回。单线程单写者模型，见 crate 文档
#[derive(Default)]
pub struct DiagnosticMessages<'a> {
    entries: Vec<Entry<'a>>,
    files: Vec<FileRecord<'a>>,
}

impl<'a> DiagnosticMessages<'a> {
    /// 创建空日志
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            files: Vec::new(),
        }
    }

    /// 条目的快照视图
    pub fn info(&self, index: usize, options: InfoOptions) -> Option<DiagnosticInfo> {
        let entry = self.entries.get(index)?;
        Some(DiagnosticInfo {
            index,
            descriptor: entry.descriptor,
            arguments: entry.arguments.clone(),
            position: entry.position,
            range: self.range(index)?,
            filename: self
                .source_file(index)
                .map(|file| file.filename().to_string()),
            message: if options.format_message {
                self.message(index, true)
            } else {
                None
            },
        })
    }

    /// 全部条目的快照视图
    pub fn infos(&self, options: InfoOptions) -> Vec<DiagnosticInfo> {
        (0..self.entries.len())
            .filter_map(|index| self.info(index, options))
            .collect()
    }

    /// 归属于指定文件的条目的快照视图
    ///
    /// 文件按地址比较：归属看的是登记的那一个对象
    pub fn infos_for_source_file(
        &self,
        file: &SourceFile,
        options: InfoOptions,
    ) -> Vec<DiagnosticInfo> {
        (0..self.entries.len())
            .filter(|&index| {
                self.source_file(index)
                    .map_or(false, |attributed| std::ptr::eq(attributed, file))
            })
            .filter_map(|index| self.info(index, options))
            .collect()
    }

    fn push(
        &mut self,
        descriptor: &'static Diagnostic,
        args: &[&str],
        position: Option<usize>,
        node: Option<&'a dyn Node>,
    ) {
        let arguments = if args.is_empty() {
            None
        } else {
            Some(args.iter().map(|arg| arg.to_string()).collect())
        };
        self.entries.push(Entry {
            descriptor,
            arguments,
            position,
            node,
        });
    }

    /// 把偏移换算到条目归属文件的行/列；无文件时退化
    fn position_in_file(&self, index: usize, offset: usize) -> LineAndCharacter {
        match self.source_file(index) {
            Some(file) => file.line_map().line_and_character_of(offset),
            None => LineAndCharacter {
                line: 0,
                character: offset,
            },
        }
    }
}

impl<'a> DiagnosticLog<'a> for DiagnosticMessages<'a> {
    fn set_source_file(&mut self, file: &'a SourceFile) {
        self.files.push(FileRecord {
            file,
            first_index: self.entries.len(),
        });
    }

    fn report(&mut self, pos: usize, descriptor: &'static Diagnostic, args: &[&str]) {
        self.push(descriptor, args, Some(pos), None);
    }

    fn report_node(
        &mut self,
        node: Option<&'a dyn Node>,
        descriptor: &'static Diagnostic,
        args: &[&str],
    ) {
        self.push(descriptor, args, node.map(|n| n.start()), node);
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn diagnostic(&self, index: usize) -> Option<&'static Diagnostic> {
        self.entries.get(index).map(|entry| entry.descriptor)
    }

    fn arguments(&self, index: usize) -> Option<&[String]> {
        self.entries.get(index).and_then(|entry| entry.arguments.as_deref())
    }

    fn node(&self, index: usize) -> Option<&'a dyn Node> {
        self.entries.get(index).and_then(|entry| entry.node)
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.entries.get(index).and_then(|entry| entry.position)
    }

    fn source_file(&self, index: usize) -> Option<&'a SourceFile> {
        // 找 first_index <= index 的最右记录；first_index 相同时
        // 后登记的文件覆盖先登记的
        let at = self
            .files
            .partition_point(|record| record.first_index <= index);
        if at == 0 {
            None
        } else {
            Some(self.files[at - 1].file)
        }
    }

    fn range(&self, index: usize) -> Option<DiagnosticRange> {
        let entry = self.entries.get(index)?;
        let (start, end) = match entry.node {
            Some(node) => (node.start(), node.end()),
            None => {
                let offset = entry.position.unwrap_or(0);
                (offset, offset)
            }
        };
        Some(DiagnosticRange {
            start: self.position_in_file(index, start),
            end: self.position_in_file(index, end),
        })
    }

    fn message(&self, index: usize, detailed: bool) -> Option<String> {
        let entry = self.entries.get(index)?;
        let args: Vec<&str> = entry
            .arguments
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .collect();
        let text = format_string(entry.descriptor.message, &args);
        if !detailed {
            return Some(text);
        }

        let offset = entry.position.unwrap_or(0);
        let (filename, position) = match self.source_file(index) {
            Some(file) => (file.filename(), file.line_map().format_position(offset)),
            // 无 LineMap 可用时括号里退化为原始偏移
            None => ("", offset.to_string()),
        };
        Some(format!(
            "{}({}): {} GM{}: {}",
            filename, position, entry.descriptor.severity, entry.descriptor.code, text
        ))
    }

    fn for_each(&self, f: &mut dyn FnMut(&str, usize)) {
        for index in 0..self.entries.len() {
            if let Some(message) = self.message(index, true) {
                f(&message, index);
            }
        }
    }
}
