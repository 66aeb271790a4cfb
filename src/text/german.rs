//! 德语引号与破折号
//!
//! « / " / “ 在开引号位置 → „，其余 » / " → ”；
//! 两侧各有一个空格的 – 或 - → —

/// 德语低位开引号
const LOW_OPENING: char = '\u{201E}';
/// 高位闭引号
const HIGH_CLOSING: char = '\u{201D}';

/// 判断前一字符是否构成开引号位置
fn is_opening_context(prev: char) -> bool {
    prev.is_whitespace()
        || matches!(
            prev,
            '-' | '\u{2013}' | '\u{2014}' | '/' | '(' | '[' | '{' | '\u{2018}' | '\u{201C}' | '\u{201E}'
        )
}

/// 替换处于开引号位置的 `target`
///
/// 位置判断基于本步骤之前的文本
fn replace_in_opening_context(text: &str, target: char, replacement: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if ch == target && prev.map_or(true, is_opening_context) {
            result.push(replacement);
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }

    result
}

/// 应用德语引号/破折号规范
///
/// 空串或 None 返回 None（与其他转换器的空串约定不同，调用方依赖此区别）
pub fn apply_quotes_dashes_de<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    let text = value.into().filter(|t| !t.is_empty())?;

    let text = replace_in_opening_context(text, '\u{00AB}', LOW_OPENING);
    let text = text.replace('\u{00BB}', &HIGH_CLOSING.to_string());

    let text = replace_in_opening_context(&text, '"', LOW_OPENING);
    let text = text.replace('"', &HIGH_CLOSING.to_string());

    let text = replace_in_opening_context(&text, '\u{201C}', LOW_OPENING);

    let text = text
        .replace(" \u{2013} ", " \u{2014} ")
        .replace(" - ", " \u{2014} ");

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_none() {
        assert_eq!(apply_quotes_dashes_de(None), None);
        assert_eq!(apply_quotes_dashes_de(""), None);
    }

    #[test]
    fn test_straight_quotes_and_dash() {
        assert_eq!(
            apply_quotes_dashes_de("\"Here's to the great - ones!\"").as_deref(),
            Some("\u{201E}Here's to the great \u{2014} ones!\u{201D}")
        );
    }

    #[test]
    fn test_guillemets() {
        assert_eq!(
            apply_quotes_dashes_de("Er sagte «Hallo» und ging").as_deref(),
            Some("Er sagte \u{201E}Hallo\u{201D} und ging")
        );
        // 非开引号位置的 « 保持不变
        assert_eq!(
            apply_quotes_dashes_de("a«b").as_deref(),
            Some("a\u{00AB}b")
        );
    }

    #[test]
    fn test_curly_opening_quote() {
        assert_eq!(
            apply_quotes_dashes_de("(\u{201C}Zitat\u{201D})").as_deref(),
            Some("(\u{201E}Zitat\u{201D})")
        );
        // 词后的 “ 不在开引号位置
        assert_eq!(
            apply_quotes_dashes_de("Wort\u{201C}").as_deref(),
            Some("Wort\u{201C}")
        );
    }

    #[test]
    fn test_consecutive_opening_quotes() {
        assert_eq!(
            apply_quotes_dashes_de("\u{201C}\u{201C}Doppelt").as_deref(),
            Some("\u{201E}\u{201E}Doppelt")
        );
    }

    #[test]
    fn test_en_dash() {
        assert_eq!(
            apply_quotes_dashes_de("Berlin \u{2013} Hamburg").as_deref(),
            Some("Berlin \u{2014} Hamburg")
        );
    }

    #[test]
    fn test_unspaced_dashes_untouched() {
        assert_eq!(
            apply_quotes_dashes_de("E-Mail und 1990\u{2013}2000, Nord -Süd").as_deref(),
            Some("E-Mail und 1990\u{2013}2000, Nord -Süd")
        );
    }

    #[test]
    fn test_dash_and_slash_contexts() {
        assert_eq!(
            apply_quotes_dashes_de("a-\u{00AB}b\u{00BB}").as_deref(),
            Some("a-\u{201E}b\u{201D}")
        );
        assert_eq!(
            apply_quotes_dashes_de("a\u{2013}\"b\"").as_deref(),
            Some("a\u{2013}\u{201E}b\u{201D}")
        );
        assert_eq!(
            apply_quotes_dashes_de("a\u{2014}\u{201C}b").as_deref(),
            Some("a\u{2014}\u{201E}b")
        );
        assert_eq!(
            apply_quotes_dashes_de("a/\u{00AB}b\u{00BB}").as_deref(),
            Some("a/\u{201E}b\u{201D}")
        );
    }

    #[test]
    fn test_bracket_contexts() {
        assert_eq!(
            apply_quotes_dashes_de("[\"b\"]").as_deref(),
            Some("[\u{201E}b\u{201D}]")
        );
        assert_eq!(
            apply_quotes_dashes_de("{\"b\"}").as_deref(),
            Some("{\u{201E}b\u{201D}}")
        );
    }

    #[test]
    fn test_opening_quote_contexts() {
        assert_eq!(
            apply_quotes_dashes_de("\u{2018}\u{201C}b").as_deref(),
            Some("\u{2018}\u{201E}b")
        );
        assert_eq!(
            apply_quotes_dashes_de("\u{201E}\u{00AB}b").as_deref(),
            Some("\u{201E}\u{201E}b")
        );
    }

    #[test]
    fn test_tab_context_and_tab_spaced_dash() {
        assert_eq!(
            apply_quotes_dashes_de("a\t\u{00AB}b\u{00BB}").as_deref(),
            Some("a\t\u{201E}b\u{201D}")
        );
        // 只认单个空格包围的破折号
        assert_eq!(apply_quotes_dashes_de("a\t-\tb").as_deref(), Some("a\t-\tb"));
        assert_eq!(
            apply_quotes_dashes_de("a\t\u{2013}\tb").as_deref(),
            Some("a\t\u{2013}\tb")
        );
    }
}
