//! SourceFile / Node - 源文件与语法节点
//!
//! 编译驱动负责读入文本并构造 SourceFile；诊断系统只借用它们，
//! 生命周期由驱动管理

use crate::line_map::LineMap;
use std::cell::OnceCell;

/// 一个已载入的源文件
///
/// 文本在构造后视为不可变；LineMap 在第一次需要时构建并缓存
#[derive(Debug)]
pub struct SourceFile {
    /// 文件名（用作诊断前缀）
    filename: String,
    /// 完整源文本
    text: String,
    /// 惰性构建的行映射表
    line_map: OnceCell<LineMap>,
}

impl SourceFile {
    /// 由已载入的文本构造源文件
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            line_map: OnceCell::new(),
        }
    }

    /// 文件名
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// 源文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 行映射表：首次调用时扫描文本构建，之后直接复用
    pub fn line_map(&self) -> &LineMap {
        self.line_map.get_or_init(|| LineMap::compute(&self.text))
    }
}

/// 语法节点的最小能力面：起止偏移
///
/// 诊断系统只读取这两个偏移，节点本身由解析器持有。
/// 偏移一律按字符计（不是字节），与 [`LineMap`] 的单位一致；
/// 对非 ASCII 文本喂字节偏移会得到错误的行/列
pub trait Node {
    /// 起始字符偏移
    fn start(&self) -> usize;
    /// 结束字符偏移
    fn end(&self) -> usize;
}

/// 解析器以 Range<usize> 表示的 span 可直接作为 Node 使用
/// （两端同样按字符偏移解释）
impl Node for std::ops::Range<usize> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}
