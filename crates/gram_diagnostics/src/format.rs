//! 消息格式化 - 模板替换与列表拼接

use crate::catalog;

/// 列表项的文本渲染能力面
///
/// 加不加引号由调用方的 token 渲染器决定，诊断系统不做假设
pub trait ListItem {
    /// 该项在消息中的显示文本
    fn item_text(&self) -> String;
}

impl ListItem for &str {
    fn item_text(&self) -> String {
        (*self).to_string()
    }
}

impl ListItem for String {
    fn item_text(&self) -> String {
        self.clone()
    }
}

/// 将模板中的 {0} {1} … 替换为对应参数
///
/// 只对模板做一趟从左到右的扫描：参数文本原样进入结果，
/// 即使参数里含有形如占位符的花括号也不会被再次替换。
/// 未引用的占位符与越界下标原样保留，不视为错误：
/// 目录中的模板就是按这种宽松契约书写的
pub fn format_string(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        rest = &rest[open..];
        match parse_placeholder(rest) {
            Some((index, len)) if index < args.len() => {
                result.push_str(args[index]);
                rest = &rest[len..];
            }
            // 越界下标或不是占位符的花括号原样保留
            _ => {
                result.push('{');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// 解析 rest 开头的 {N} 占位符，返回 (下标, 占位符字节长度)
fn parse_placeholder(rest: &str) -> Option<(usize, usize)> {
    let body = rest.strip_prefix('{')?;
    let close = body.find('}')?;
    let index: usize = body[..close].parse().ok()?;
    Some((index, close + 2))
}

/// 将候选项拼成人类可读的列表
///
/// 空列表给空串；单项原样给出；两项为 "A or B"；
/// 三项及以上为 "a, b, or c"
pub fn format_list<T: ListItem>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.item_text(),
        [first, second] => format_string(
            catalog::TWO_ITEM_LIST.message,
            &[first.item_text().as_str(), second.item_text().as_str()],
        ),
        [leading @ .., last] => {
            let mut result = String::new();
            for item in leading {
                result.push_str(&format_string(
                    catalog::LEADING_LIST_ITEM.message,
                    &[item.item_text().as_str()],
                ));
            }
            result.push_str(&format_string(
                catalog::FINAL_LIST_ITEM.message,
                &[last.item_text().as_str()],
            ));
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_string_basic() {
        assert_eq!(
            format_string("{0} expected.", &["Identifier"]),
            "Identifier expected."
        );
        assert_eq!(
            format_string("Expected {0} arguments, but found {1}.", &["2", "3"]),
            "Expected 2 arguments, but found 3."
        );
    }

    #[test]
    fn test_format_string_out_of_range_placeholder() {
        // 越界下标不替换也不报错
        assert_eq!(format_string("{5} expected.", &["Identifier"]), "{5} expected.");
    }

    #[test]
    fn test_format_string_unused_arguments() {
        assert_eq!(format_string("done.", &["a", "b"]), "done.");
    }

    #[test]
    fn test_format_string_repeated_placeholder() {
        assert_eq!(format_string("{0} and {0}", &["x"]), "x and x");
    }

    #[test]
    fn test_format_string_braces_in_argument_pass_through() {
        // 参数是调用方的任意文本（token 拼写可能含花括号），
        // 不参与后续占位符替换
        assert_eq!(format_string("{0} or {1}", &["{1}", "b"]), "{1} or b");
        assert_eq!(format_string("{0} expected.", &["'{'"]), "'{' expected.");
        assert_eq!(format_list(&["{1}", "b"]), "{1} or b");
    }

    #[test]
    fn test_format_string_malformed_placeholders() {
        assert_eq!(format_string("a {x} b", &["v"]), "a {x} b");
        assert_eq!(format_string("a {} b", &["v"]), "a {} b");
        assert_eq!(format_string("a {0 b", &["v"]), "a {0 b");
    }

    #[test]
    fn test_format_list_empty() {
        let items: [&str; 0] = [];
        assert_eq!(format_list(&items), "");
    }

    #[test]
    fn test_format_list_one() {
        assert_eq!(format_list(&["a"]), "a");
    }

    #[test]
    fn test_format_list_two() {
        assert_eq!(format_list(&["a", "b"]), "a or b");
    }

    #[test]
    fn test_format_list_three_or_more() {
        assert_eq!(format_list(&["a", "b", "c"]), "a, b, or c");
        assert_eq!(format_list(&["a", "b", "c", "d"]), "a, b, c, or d");
    }

    #[test]
    fn test_format_list_custom_quoting() {
        struct Keyword(&'static str);
        impl ListItem for Keyword {
            fn item_text(&self) -> String {
                format!("'{}'", self.0)
            }
        }
        assert_eq!(
            format_list(&[Keyword("rule"), Keyword("token")]),
            "'rule' or 'token'"
        );
    }
}
