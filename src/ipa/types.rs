//! IPA 语料类型定义

/// 词边界符号
pub const BOUNDARY_MARKER: &str = "#";

/// 原始记录：一行输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 语言标签（不透明标识）
    pub tag: String,
    /// 转写文本，可能包含多个空白分隔的转写
    pub text: String,
}

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 音段符号（可带附着的附加符）
    Symbol,
    /// 词边界
    Boundary,
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn symbol(ch: char) -> Self {
        Self {
            text: ch.to_string(),
            kind: TokenKind::Symbol,
        }
    }

    pub fn boundary() -> Self {
        Self {
            text: BOUNDARY_MARKER.to_string(),
            kind: TokenKind::Boundary,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == TokenKind::Boundary
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// 带语言标签的 token 序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTokenSequence {
    pub tokens: Vec<Token>,
    pub tag: String,
}

impl TaggedTokenSequence {
    pub fn new(tokens: Vec<Token>, tag: impl Into<String>) -> Self {
        Self {
            tokens,
            tag: tag.into(),
        }
    }

    /// 拼接所有 token 的表层形式（去重键的一部分）
    pub fn surface(&self) -> String {
        self.tokens.iter().map(Token::as_str).collect()
    }
}
