//! 直引号 → 弯引号

use crate::text::rules::is_word_char;

/// 将直引号替换为弯引号
///
/// - 前一字符为词字符（词边界在引号之前）→ 开引号 `‘` / `“`
/// - 否则后一字符为词字符 → 闭引号 `’` / `”`
/// - 两侧都不是词字符的引号保持原样
///
/// 空串或 None 返回空串
pub fn apply_curly_quotes<'a>(value: impl Into<Option<&'a str>>) -> String {
    let Some(text) = value.into().filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let chars: Vec<char> = text.chars().collect();

    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let (opening, closing) = match ch {
                '\'' => ('\u{2018}', '\u{2019}'),
                '"' => ('\u{201C}', '\u{201D}'),
                _ => return ch,
            };

            if i > 0 && is_word_char(chars[i - 1]) {
                opening
            } else if chars.get(i + 1).is_some_and(|&next| is_word_char(next)) {
                closing
            } else {
                ch
            }
        })
        .collect()
}
