//! LineMap - 行位置映射
//!
//! 将源文本的绝对字符偏移映射为行/列位置，以及反向映射

/// 零基的行/列位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAndCharacter {
    /// 行号（零基）
    pub line: usize,
    /// 列号（零基，相对行首的字符数）
    pub character: usize,
}

/// 行位置映射表
///
/// 对一份不可变文本扫描一次，之后所有查询都走缓存好的偏移表。
/// 文本由所属的 [`SourceFile`](crate::source::SourceFile) 持有，
/// 构建后假定不再变化。
#[derive(Debug, Clone)]
pub struct LineMap {
    /// 每个物理行的起始偏移：严格递增，首项恒为 0，
    /// 末尾总有一项指向最后一个行终止符之后的文本（可能是空行）
    line_starts: Vec<usize>,
    /// 每个物理行的行终止符起始偏移；末行取文本总长
    line_ends: Vec<usize>,
}

impl LineMap {
    /// 扫描文本一次，记录每个行终止符之后的偏移作为新行起点
    ///
    /// 识别的终止符：换行、回车（回车+换行算一个）、
    /// U+2028 行分隔符、U+2029 段分隔符、U+0085 NEL
    pub fn compute(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut line_ends = Vec::new();
        let mut len = 0;

        let mut chars = text.chars().enumerate().peekable();
        while let Some((offset, ch)) = chars.next() {
            len = offset + 1;
            match ch {
                '\r' => {
                    line_ends.push(offset);
                    // 回车后紧跟的换行被吸收，不产生空行
                    if matches!(chars.peek(), Some((_, '\n'))) {
                        chars.next();
                        len += 1;
                        line_starts.push(offset + 2);
                    } else {
                        line_starts.push(offset + 1);
                    }
                }
                '\n' | '\u{2028}' | '\u{2029}' | '\u{0085}' => {
                    line_ends.push(offset);
                    line_starts.push(offset + 1);
                }
                _ => {}
            }
        }
        line_ends.push(len);

        Self {
            line_starts,
            line_ends,
        }
    }

    /// 行起始偏移表
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// 行数（含最后一个行终止符之后的行）
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 二分查找不超过 pos 的最大行起点，返回零基行/列
    pub fn line_and_character_of(&self, pos: usize) -> LineAndCharacter {
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            // 未命中时取插入点的前一行
            Err(insert) => insert - 1,
        };
        LineAndCharacter {
            line,
            character: pos - self.line_starts[line],
        }
    }

    /// 以一基 "行,列" 渲染偏移，供人类阅读
    pub fn format_position(&self, pos: usize) -> String {
        let pos = self.line_and_character_of(pos);
        format!("{},{}", pos.line + 1, pos.character + 1)
    }

    /// 反向映射：行/列 → 绝对偏移
    ///
    /// 行越界、列超出行体长度、或算出的偏移落在行终止符上时返回 None
    pub fn position_of(&self, pos: LineAndCharacter) -> Option<usize> {
        if pos.line >= self.line_starts.len() {
            return None;
        }
        let offset = self.line_starts[pos.line] + pos.character;
        let last = self.line_starts.len() - 1;
        if pos.line < last {
            // 行终止符以及之后的下一行都不属于本行
            if offset >= self.line_ends[pos.line] {
                return None;
            }
        } else if offset > self.line_ends[last] {
            return None;
        }
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc(line: usize, character: usize) -> LineAndCharacter {
        LineAndCharacter { line, character }
    }

    #[test]
    fn test_line_starts_mixed_terminators() {
        let map = LineMap::compute("abc\ndef\r\nghi");
        assert_eq!(map.line_starts(), &[0, 4, 9]);
        assert_eq!(map.line_count(), 3);
    }

    #[test]
    fn test_line_and_character_of() {
        let map = LineMap::compute("abc\ndef\r\nghi");
        assert_eq!(map.line_and_character_of(0), lc(0, 0));
        assert_eq!(map.line_and_character_of(3), lc(0, 3));
        assert_eq!(map.line_and_character_of(4), lc(1, 0));
        assert_eq!(map.line_and_character_of(9), lc(2, 0));
        assert_eq!(map.line_and_character_of(11), lc(2, 2));
    }

    #[test]
    fn test_format_position_is_one_based() {
        let map = LineMap::compute("abc\ndef\r\nghi");
        assert_eq!(map.format_position(0), "1,1");
        assert_eq!(map.format_position(5), "2,2");
        assert_eq!(map.format_position(9), "3,1");
    }

    #[test]
    fn test_position_of_round_trip() {
        let text = "abc\ndef\r\nghi";
        let map = LineMap::compute(text);
        for offset in [0, 1, 2, 4, 5, 6, 9, 10, 11] {
            let pos = map.line_and_character_of(offset);
            assert_eq!(map.position_of(pos), Some(offset));
        }
    }

    #[test]
    fn test_position_of_rejects_bad_positions() {
        let map = LineMap::compute("abc\ndef\r\nghi");
        // 行越界
        assert_eq!(map.position_of(lc(3, 0)), None);
        // 列超出行体长度（第 1 行只有 3 个字符）
        assert_eq!(map.position_of(lc(1, 10)), None);
        // 偏移正好落在行终止符上
        assert_eq!(map.position_of(lc(0, 3)), None);
        assert_eq!(map.position_of(lc(1, 3)), None);
        assert_eq!(map.position_of(lc(1, 4)), None);
    }

    #[test]
    fn test_position_of_end_of_text() {
        let map = LineMap::compute("abc\ndef\r\nghi");
        // 末行行尾是合法的光标位置
        assert_eq!(map.position_of(lc(2, 3)), Some(12));
        assert_eq!(map.position_of(lc(2, 4)), None);
    }

    #[test]
    fn test_trailing_terminator_creates_empty_line() {
        let map = LineMap::compute("abc\n");
        assert_eq!(map.line_starts(), &[0, 4]);
        assert_eq!(map.line_and_character_of(4), lc(1, 0));
        assert_eq!(map.position_of(lc(1, 0)), Some(4));
    }

    #[test]
    fn test_empty_text() {
        let map = LineMap::compute("");
        assert_eq!(map.line_starts(), &[0]);
        assert_eq!(map.line_and_character_of(0), lc(0, 0));
        assert_eq!(map.position_of(lc(0, 0)), Some(0));
        assert_eq!(map.position_of(lc(0, 1)), None);
    }

    #[test]
    fn test_lone_carriage_return() {
        let map = LineMap::compute("a\rb");
        assert_eq!(map.line_starts(), &[0, 2]);
        assert_eq!(map.line_and_character_of(2), lc(1, 0));
    }

    #[test]
    fn test_crlf_is_single_terminator() {
        let map = LineMap::compute("a\r\nb");
        assert_eq!(map.line_starts(), &[0, 3]);
        // \n 不单独开一个空行
        assert_eq!(map.line_count(), 2);
    }

    #[test]
    fn test_unicode_terminators() {
        let map = LineMap::compute("a\u{2028}b\u{2029}c\u{0085}d");
        assert_eq!(map.line_starts(), &[0, 2, 4, 6]);
        assert_eq!(map.line_and_character_of(6), lc(3, 0));
    }
}
