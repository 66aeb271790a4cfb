//! 标题/引文文本规范化
//!
//! ## 处理流程
//! 1. 分词（词/空白/冒号/标点/引号，拼接可还原原文）
//! 2. 按 AP 规则逐 token 定大小写
//! 3. 拼接后修正撇号后的字母
//!
//! 弯引号、德语引号/破折号为独立转换，可通过 [`TextEngine`] 串联。
//! 所有函数均为纯函数，只读取进程级常量表，可并发调用。

mod apostrophe;
mod engine;
mod german;
mod quotes;
mod rules;
mod title_case;
mod tokenizer;
mod types;

pub use apostrophe::{lowercase_after_apostrophe, ApostropheRule};
pub use engine::TextEngine;
pub use german::apply_quotes_dashes_de;
pub use quotes::apply_curly_quotes;
pub use title_case::{apply_ap_title_case, capitalize, TitleCaser};
pub use tokenizer::{Token, TokenType, Tokenizer};
pub use types::{Transform, TransformResult};
