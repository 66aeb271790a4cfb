//! 文本转换类型定义

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 文本转换种类
///
/// 命令行取值为 kebab-case（与 [`Transform::display_name`] 一致），配置文件中为 snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// AP 风格标题大写（含撇号修正）
    TitleCase,
    /// 仅做撇号后字母小写化
    LowercaseAfterApostrophe,
    /// 直引号 → 弯引号
    CurlyQuotes,
    /// 德语引号与破折号
    QuotesDashesDe,
}

impl Transform {
    /// 获取显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Transform::TitleCase => "title-case",
            Transform::LowercaseAfterApostrophe => "lowercase-after-apostrophe",
            Transform::CurlyQuotes => "curly-quotes",
            Transform::QuotesDashesDe => "quotes-dashes-de",
        }
    }
}

/// 转换结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    /// 转换后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 实际产生改动的转换（按执行顺序）
    pub applied: Vec<Transform>,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl TransformResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_matches_cli_value() {
        for transform in Transform::value_variants() {
            let value = transform.to_possible_value().unwrap();
            assert_eq!(value.get_name(), transform.display_name());
            assert_eq!(
                Transform::from_str(transform.display_name(), false).unwrap(),
                *transform
            );
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Transform::QuotesDashesDe).unwrap(),
            "\"quotes_dashes_de\""
        );
    }
}
