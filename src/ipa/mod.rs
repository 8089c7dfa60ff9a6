//! IPA 语料规范化层
//!
//! ## 处理流程
//! 1. 规范化：NFD 分解 + 空白统一 + 字符替换 + 整串淘汰 + 截断
//! 2. 分词：括号/引号丢弃、词边界、附加符附着
//!
//! 符号分类见 [`rules`]。

mod normalizer;
pub mod rules;
mod tokenizer;
mod types;

pub use normalizer::Normalizer;
pub use rules::{SymbolAction, SymbolTables};
pub use tokenizer::{Tokenizer, TokenizerOptions, DEFAULT_MIN_LENGTH, DEFAULT_PIPE_TRUNCATION_TAG};
pub use types::{RawRecord, TaggedTokenSequence, Token, TokenKind, BOUNDARY_MARKER};
