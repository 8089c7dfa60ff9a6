//! IPA 分词器
//!
//! 把一条已规范化的转写切成音段 token：
//! 圆括号/引号内的内容整体丢弃，空白变成词边界，
//! 附加符附着到前一个 token，遇到 `/` 截断（开头的 `/` 除外）。

use crate::ipa::rules::{SymbolTables, VOICELESS_MARK};
use crate::ipa::types::Token;

/// 默认最少 token 数
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// 把 `|` 当作 `/` 使用的语言标签
pub const DEFAULT_PIPE_TRUNCATION_TAG: &str = "YEY";

/// 分词选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// 少于该数量的结果整体丢弃
    pub min_length: usize,
    /// 该标签下 `|` 也会截断
    pub pipe_truncation_tag: String,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            pipe_truncation_tag: DEFAULT_PIPE_TRUNCATION_TAG.to_string(),
        }
    }
}

/// 上一步动作：是否正常追加了字符
///
/// 只有紧跟在正常追加之后的附加符才可能附着
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastAction {
    Appended,
    Separated,
}

/// 分词器
pub struct Tokenizer {
    options: TokenizerOptions,
    tables: &'static SymbolTables,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            tables: SymbolTables::global(),
        }
    }

    /// 分词
    ///
    /// 结果不足最少 token 数时返回空序列
    pub fn tokenize(&self, transcription: &str, tag: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut in_paren = false;
        let mut last = LastAction::Separated;

        for ch in transcription.chars() {
            if ch == '(' || (ch == '"' && !in_paren) {
                in_paren = true;
                last = LastAction::Separated;
            } else if ch == ')' || (ch == '"' && in_paren) {
                in_paren = false;
                last = LastAction::Separated;
            } else if in_paren {
                last = LastAction::Separated;
            } else if self.tables.is_delete(ch) {
                last = LastAction::Separated;
            } else if ch.is_whitespace() {
                if tokens.last().is_some_and(|t| !t.is_boundary()) {
                    tokens.push(Token::boundary());
                }
                last = LastAction::Separated;
            } else if ch == '/' || (ch == '|' && tag == self.options.pipe_truncation_tag) {
                // 开头的斜线是音位括号的左半边，之后再出现则截断
                if !tokens.is_empty() {
                    break;
                }
                last = LastAction::Separated;
            } else if matches!(ch, '|' | '[' | ']') {
                // 结构性括号，不改变附着状态
            } else if self.tables.is_attach(ch) {
                if last == LastAction::Appended {
                    self.try_attach(&mut tokens, ch);
                }
            } else {
                tokens.push(Token::symbol(ch));
                last = LastAction::Appended;
            }
        }

        if tokens.last().is_some_and(Token::is_boundary) {
            tokens.pop();
        }

        if tokens.len() >= self.options.min_length {
            tokens
        } else {
            Vec::new()
        }
    }

    /// 尝试把附加符附着到最后一个 token，不满足条件时直接丢弃
    fn try_attach(&self, tokens: &mut [Token], mark: char) {
        let Some(prev) = tokens.last_mut() else {
            return;
        };
        if prev.is_boundary() {
            return;
        }
        // 清化符只能附着到响音/近音上
        if mark == VOICELESS_MARK {
            let base_ok = prev
                .text
                .chars()
                .next()
                .is_some_and(|base| self.tables.is_voiceable_base(base));
            if !base_ok {
                return;
            }
        }
        // 重复附加符
        if prev.text.ends_with(mark) {
            return;
        }
        prev.text.push(mark);
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
    }
}
