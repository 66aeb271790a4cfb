//! 内容策展后台的标题/引文文本工具
//!
//! - [`text`]：AP 标题大写、撇号修正、弯引号、德语引号/破折号
//! - [`file_size`]：文件大小格式化
//! - [`config`]：可选的 JSON 配置

pub mod config;
pub mod file_size;
pub mod text;

pub use config::{AppConfig, TitleCaseConfig};
pub use file_size::format_file_size;
pub use text::{
    apply_ap_title_case, apply_curly_quotes, apply_quotes_dashes_de, capitalize,
    lowercase_after_apostrophe, TextEngine, Transform, TransformResult,
};
