//! AP 风格标题大写
//!
//! 规则优先级：
//! 0. 产品名（iPhone、iOS）保持规范写法
//! 1. 首个/末个 token → 首字母大写
//! 2. 紧跟冒号（副标题开头）→ 首字母大写
//! 3. 紧跟开引号 → 首字母大写
//! 4. 停用词 → 小写
//! 5. 其余 → 首字母大写

use crate::config::TitleCaseConfig;
use crate::text::apostrophe::ApostropheRule;
use crate::text::rules::{ProductNames, StopWords};
use crate::text::tokenizer::{Token, TokenType, Tokenizer};

lazy_static::lazy_static! {
    /// 默认标题大写器（进程级只读）
    static ref DEFAULT_TITLE_CASER: TitleCaser = TitleCaser::new();
}

/// 首字母大写，其余字符保持不变
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 标题大写器（可复用，预构建规则表）
#[derive(Debug, Clone)]
pub struct TitleCaser {
    stop_words: StopWords,
    product_names: ProductNames,
    apostrophe_rule: ApostropheRule,
}

impl TitleCaser {
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::new(),
            product_names: ProductNames::new(),
            apostrophe_rule: ApostropheRule::default(),
        }
    }

    /// 根据配置创建
    pub fn from_config(config: &TitleCaseConfig) -> Self {
        let mut stop_words = StopWords::new();
        stop_words.extend(&config.extra_stop_words);

        let mut product_names = ProductNames::new();
        product_names.extend(&config.extra_product_suffixes);

        Self {
            stop_words,
            product_names,
            apostrophe_rule: ApostropheRule::new(config.preserve_o_prefix),
        }
    }

    /// 应用标题大写，随后做撇号修正
    pub fn apply(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let tokens = Tokenizer::tokenize(text);
        let cased = self.case_tokens(&tokens);
        self.apostrophe_rule.apply(&cased.concat())
    }

    /// 对 token 序列逐个定大小写
    ///
    /// 输出长度与输入一致，分隔符原样透传
    pub fn case_tokens(&self, tokens: &[Token]) -> Vec<String> {
        let last = tokens.len().saturating_sub(1);

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if !token.is_word() {
                    return token.text.clone();
                }

                if let Some(product) = self.product_names.try_match(&token.text) {
                    return product;
                }

                let prev = i.checked_sub(1).map(|p| &tokens[p]);
                let after_colon = prev.is_some_and(|p| p.token_type == TokenType::Colon);
                let after_quote = prev.is_some_and(Token::is_opening_quote);

                if i == 0 || i == last || after_colon || after_quote {
                    capitalize(&token.text)
                } else if self.stop_words.contains(&token.text) {
                    token.text.to_lowercase()
                } else {
                    capitalize(&token.text)
                }
            })
            .collect()
    }
}

impl Default for TitleCaser {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认规则应用 AP 标题大写
///
/// 空串或 None 返回空串
pub fn apply_ap_title_case<'a>(value: impl Into<Option<&'a str>>) -> String {
    match value.into() {
        Some(text) => DEFAULT_TITLE_CASER.apply(text),
        None => String::new(),
    }
}
