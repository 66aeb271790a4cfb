//! 规则表定义
//!
//! 包含停用词表、产品名后缀、引号/破折号字符集

use std::collections::{HashMap, HashSet};

/// ASCII 与弯撇号（用于缩写/所有格识别）
pub const APOSTROPHES: [char; 3] = ['\'', '\u{2018}', '\u{2019}'];

/// 开引号（其后的词需要大写）
pub const OPENING_QUOTES: [char; 4] = ['\'', '"', '\u{2018}', '\u{201C}'];

/// 分词用的引号字符
pub const QUOTE_CHARS: [char; 6] = ['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// 分词用的标点字符（含各类连字符）
pub const PUNCTUATION_CHARS: [char; 10] = [
    '-', '\u{2011}', '\u{2013}', '\u{2014}', ',', ';', '!', '?', '(', ')',
];

/// 判断是否为词字符
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

lazy_static::lazy_static! {
    /// 默认停用词（冠词、短介词、并列连词）
    static ref DEFAULT_STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "and", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so",
        "the", "to", "up", "yet",
    ]
    .into_iter()
    .collect();

    /// 产品名后缀 → 规范写法（i + 后缀）
    static ref DEFAULT_PRODUCT_SUFFIXES: HashMap<&'static str, &'static str> = HashMap::from([
        ("phone", "Phone"),
        ("pad", "Pad"),
        ("pod", "Pod"),
        ("mac", "Mac"),
        ("os", "OS"),
        ("cloud", "Cloud"),
        ("tunes", "Tunes"),
        ("message", "Message"),
        ("pados", "PadOS"),
    ]);
}

/// 停用词表
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self {
            words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// 追加自定义停用词（统一转小写，忽略空白项）
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// 检查是否为停用词（大小写不敏感）
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

/// 产品名表（iPhone、iOS 等）
#[derive(Debug, Clone)]
pub struct ProductNames {
    /// 小写后缀 → 规范后缀
    suffixes: HashMap<String, String>,
}

impl ProductNames {
    pub fn new() -> Self {
        Self {
            suffixes: DEFAULT_PRODUCT_SUFFIXES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// 追加自定义后缀，规范写法为首字母大写、其余小写
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for suffix in extra {
            let suffix = suffix.as_ref().trim();
            if suffix.is_empty() {
                continue;
            }
            self.suffixes
                .entry(suffix.to_lowercase())
                .or_insert_with(|| crate::text::capitalize(&suffix.to_lowercase()));
        }
    }

    /// 尝试匹配产品名
    ///
    /// 返回 Some(规范写法) 如果词形为 `i` + 已知后缀
    pub fn try_match(&self, word: &str) -> Option<String> {
        let rest = word.strip_prefix('i').or_else(|| word.strip_prefix('I'))?;
        self.suffixes
            .get(rest.to_lowercase().as_str())
            .map(|canonical| format!("i{}", canonical))
    }
}

impl Default for ProductNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        let stop = StopWords::new();
        assert!(stop.contains("the"));
        assert!(stop.contains("The")); // 大小写不敏感
        assert!(stop.contains("FOR"));
        assert!(!stop.contains("from"));
        assert!(!stop.contains("whom"));
    }

    #[test]
    fn test_stop_words_extend() {
        let mut stop = StopWords::new();
        stop.extend(["  Via ", "", "per"]);
        assert!(stop.contains("via"));
        assert!(stop.contains("Per"));
        assert!(!stop.contains(""));
    }

    #[test]
    fn test_product_names() {
        let products = ProductNames::new();
        assert_eq!(products.try_match("iphone").as_deref(), Some("iPhone"));
        assert_eq!(products.try_match("IPHONE").as_deref(), Some("iPhone"));
        assert_eq!(products.try_match("ios").as_deref(), Some("iOS"));
        assert_eq!(products.try_match("i"), None);
        assert_eq!(products.try_match("idea"), None);
        assert_eq!(products.try_match("phone"), None);
    }

    #[test]
    fn test_product_names_extend() {
        let mut products = ProductNames::new();
        products.extend(["player", "STORE"]);
        assert_eq!(products.try_match("iplayer").as_deref(), Some("iPlayer"));
        assert_eq!(products.try_match("iStore").as_deref(), Some("iStore"));
        // 内置写法不被覆盖
        products.extend(["OS"]);
        assert_eq!(products.try_match("ios").as_deref(), Some("iOS"));
    }

    #[test]
    fn test_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('É'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char(' '));
    }
}
