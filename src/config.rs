// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::text::Transform;

// ============================================================================
// 标题大写配置
// ============================================================================

/// 标题大写配置
///
/// 在内置规则表之上追加，不会移除内置项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCaseConfig {
    /// 追加的停用词（大小写不敏感）
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    /// 追加的产品名后缀（i + 后缀，如 "player" → iPlayer）
    #[serde(default)]
    pub extra_product_suffixes: Vec<String>,
    /// 保留词首 O' 之后的大写（O'Hearn），默认关闭
    #[serde(default)]
    pub preserve_o_prefix: bool,
}

// ============================================================================
// 应用配置
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub title_case: TitleCaseConfig,
    /// 未显式指定时按顺序执行的转换
    #[serde(default = "default_transforms")]
    pub default_transforms: Vec<Transform>,
}

fn default_transforms() -> Vec<Transform> {
    vec![Transform::TitleCase]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            title_case: TitleCaseConfig::default(),
            default_transforms: default_transforms(),
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("CurationText").join("config.json"))
    }

    /// 从默认路径加载
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// 从指定路径加载
    ///
    /// 文件不存在时返回默认配置；整体解析失败时逐段恢复
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        // 先解析为 Value，以便逐段恢复
        let v: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("配置文件不是合法 JSON: {:?}", path))?;

        let config = match serde_json::from_value(v.clone()) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("直接解析配置失败，尝试逐段恢复: {}", e);
                let mut cfg = AppConfig::new();

                if let Some(title_case) = v.get("title_case") {
                    match serde_json::from_value(title_case.clone()) {
                        Ok(tc) => {
                            tracing::info!("成功恢复 title_case");
                            cfg.title_case = tc;
                        }
                        Err(e) => tracing::warn!("title_case 无法恢复，使用默认值: {}", e),
                    }
                }
                if let Some(transforms) = v.get("default_transforms") {
                    match serde_json::from_value(transforms.clone()) {
                        Ok(t) => {
                            tracing::info!("成功恢复 default_transforms");
                            cfg.default_transforms = t;
                        }
                        Err(e) => {
                            tracing::warn!("default_transforms 无法恢复，使用默认值: {}", e)
                        }
                    }
                }

                cfg
            }
        };

        Ok(config)
    }

    /// 保存到默认路径
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// 保存到指定路径（先写临时文件，再原子替换）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            e
        })?;

        tracing::info!("配置保存成功");
        Ok(())
    }
}
