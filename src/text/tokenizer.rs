//! 分词器
//!
//! 将输入文本分割为：词、空白、冒号、标点、引号。
//! 所有 token 按原顺序拼接后与原文完全一致。

use crate::text::rules::{OPENING_QUOTES, PUNCTUATION_CHARS, QUOTE_CHARS};

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// 词（非分隔符字符序列）
    Word,
    /// 空白符序列
    Whitespace,
    /// 冒号及其后的空白
    Colon,
    /// 标点/连字符
    Punctuation,
    /// 直引号或弯引号
    Quote,
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub token_type: TokenType,
    /// 在原文中的起始字节索引
    pub start: usize,
    /// 在原文中的结束字节索引（不含）
    pub end: usize,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    /// 是否为开引号（`'` `"` `‘` `“`）
    pub fn is_opening_quote(&self) -> bool {
        self.token_type == TokenType::Quote
            && self
                .text
                .chars()
                .next()
                .is_some_and(|ch| OPENING_QUOTES.contains(&ch))
    }
}

/// 分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 分词
    ///
    /// 词字符累积为一个 token；冒号吞掉其后的空白；空白连续成段；
    /// 其余分隔符各自成为单字符 token。
    pub fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            let Some(token_type) = Self::classify_char(ch) else {
                word_start.get_or_insert(idx);
                continue;
            };

            if let Some(start) = word_start.take() {
                tokens.push(Self::make_token(text, start, idx, TokenType::Word));
            }

            let mut end = idx + ch.len_utf8();
            if matches!(token_type, TokenType::Colon | TokenType::Whitespace) {
                while let Some(&(next_idx, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        break;
                    }
                    end = next_idx + next.len_utf8();
                    chars.next();
                }
            }

            tokens.push(Self::make_token(text, idx, end, token_type));
        }

        if let Some(start) = word_start {
            tokens.push(Self::make_token(text, start, text.len(), TokenType::Word));
        }

        tokens
    }

    /// 拼接 token（不插入任何字符）
    pub fn join(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn make_token(text: &str, start: usize, end: usize, token_type: TokenType) -> Token {
        Token {
            text: text[start..end].to_string(),
            token_type,
            start,
            end,
        }
    }

    /// 字符分类，词字符返回 None
    fn classify_char(ch: char) -> Option<TokenType> {
        if ch == ':' {
            Some(TokenType::Colon)
        } else if ch.is_whitespace() {
            Some(TokenType::Whitespace)
        } else if QUOTE_CHARS.contains(&ch) {
            Some(TokenType::Quote)
        } else if PUNCTUATION_CHARS.contains(&ch) {
            Some(TokenType::Punctuation)
        } else {
            None
        }
    }
}
