//! 文本主引擎
//!
//! 组合标题大写、撇号修正、弯引号、德语引号/破折号

use std::time::Instant;

use crate::config::AppConfig;
use crate::text::apostrophe::ApostropheRule;
use crate::text::german::apply_quotes_dashes_de;
use crate::text::quotes::apply_curly_quotes;
use crate::text::title_case::TitleCaser;
use crate::text::types::{Transform, TransformResult};

/// 文本引擎（可复用，预构建规则）
#[derive(Debug, Clone)]
pub struct TextEngine {
    title_caser: TitleCaser,
    apostrophe_rule: ApostropheRule,
    /// 未指定转换时使用的默认序列
    default_transforms: Vec<Transform>,
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            title_caser: TitleCaser::new(),
            apostrophe_rule: ApostropheRule::default(),
            default_transforms: vec![Transform::TitleCase],
        }
    }

    /// 根据配置创建引擎
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title_caser: TitleCaser::from_config(&config.title_case),
            apostrophe_rule: ApostropheRule::new(config.title_case.preserve_o_prefix),
            default_transforms: config.default_transforms.clone(),
        }
    }

    pub fn default_transforms(&self) -> &[Transform] {
        &self.default_transforms
    }

    /// 应用单个转换
    pub fn apply(&self, transform: Transform, text: &str) -> TransformResult {
        self.apply_all(&[transform], text)
    }

    /// 按顺序应用多个转换
    ///
    /// 纯函数，不可失败
    pub fn apply_all(&self, transforms: &[Transform], text: &str) -> TransformResult {
        let start = Instant::now();

        if text.is_empty() {
            return TransformResult::unchanged(String::new(), 0);
        }

        let mut current = text.to_string();
        let mut applied = Vec::new();

        for &transform in transforms {
            let next = self.run(transform, &current);
            if next != current {
                applied.push(transform);
                current = next;
            }
        }

        let elapsed_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            applied = ?applied.iter().map(Transform::display_name).collect::<Vec<_>>(),
            elapsed_us,
            "文本转换完成"
        );

        TransformResult {
            changed: current != text,
            text: current,
            applied,
            elapsed_us,
        }
    }

    fn run(&self, transform: Transform, text: &str) -> String {
        match transform {
            Transform::TitleCase => self.title_caser.apply(text),
            Transform::LowercaseAfterApostrophe => self.apostrophe_rule.apply(text),
            Transform::CurlyQuotes => apply_curly_quotes(text),
            // 空输入在 apply_all 入口已处理，None 只会来自空串
            Transform::QuotesDashesDe => apply_quotes_dashes_de(text).unwrap_or_default(),
        }
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}
