//! 撇号后字母小写化
//!
//! 标题大写会把缩写/所有格的后缀字母错误大写（"Haven'T"、"Foo'S"），
//! 这里对「词字符 + 撇号 + 字母」中的字母做小写还原。
//! 引号前面总是分隔符或串首，因此不会误伤引号包围的内容。

use crate::text::rules::{is_word_char, APOSTROPHES};

/// 撇号规则
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApostropheRule {
    /// 保留词首大写 `O'` 后的大写字母（O'Hearn）
    pub preserve_o_prefix: bool,
}

impl ApostropheRule {
    pub fn new(preserve_o_prefix: bool) -> Self {
        Self { preserve_o_prefix }
    }

    /// 应用规则
    ///
    /// 判定基于原文字符（等价于后行断言），结果与逐个替换的顺序无关
    pub fn apply(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut result = String::with_capacity(input.len());

        for (i, &ch) in chars.iter().enumerate() {
            if i >= 2
                && ch.is_alphabetic()
                && APOSTROPHES.contains(&chars[i - 1])
                && is_word_char(chars[i - 2])
                && !(self.preserve_o_prefix && Self::is_o_prefix(&chars, i - 2))
            {
                result.extend(ch.to_lowercase());
            } else {
                result.push(ch);
            }
        }

        result
    }

    /// `idx` 处是否为独立的大写 O（前面是串首或非词字符）
    fn is_o_prefix(chars: &[char], idx: usize) -> bool {
        chars[idx] == 'O' && (idx == 0 || !is_word_char(chars[idx - 1]))
    }
}

/// 使用基础规则小写化撇号后的字母
pub fn lowercase_after_apostrophe(input: &str) -> String {
    ApostropheRule::default().apply(input)
}
