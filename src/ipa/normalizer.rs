//! IPA 转写规范化
//!
//! 1. NFD 分解（不用 NFKD，否则送气符等会被折叠成普通 ASCII）
//! 2. 所有空白替换为 ASCII 空格
//! 3. 逐字符替换
//! 4. 含淘汰符号则整条清空
//! 5. 在第一个截断符处截断

use unicode_normalization::UnicodeNormalization;

use crate::ipa::rules::SymbolTables;

/// 规范化器
pub struct Normalizer;

impl Normalizer {
    /// 规范化一条转写
    ///
    /// 返回空串表示整条丢弃
    pub fn normalize(text: &str) -> String {
        Self::normalize_with(SymbolTables::global(), text)
    }

    pub fn normalize_with(tables: &SymbolTables, text: &str) -> String {
        let mut replaced = String::with_capacity(text.len());
        for ch in text.nfd() {
            if ch.is_whitespace() {
                replaced.push(' ');
            } else if let Some(to) = tables.replacement(ch) {
                replaced.push_str(to);
            } else {
                replaced.push(ch);
            }
        }

        // 替换可能把组合符换成不同结合类的组合符，重新排序保证结果是规范分解形式
        let decomposed: String = replaced.nfd().collect();

        if decomposed.chars().any(|ch| tables.is_eliminate(ch)) {
            return String::new();
        }

        match decomposed.find(|ch: char| tables.is_truncate_marker(ch)) {
            Some(cut) => decomposed[..cut].to_string(),
            None => decomposed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_and_replace() {
        // é -> e + 锐音（锐音留给分词阶段删除）
        assert_eq!(Normalizer::normalize("\u{00E9}"), "e\u{0301}");
        // g -> ɡ，: -> ː
        assert_eq!(Normalizer::normalize("ga:"), "\u{0261}a\u{02D0}");
        // 一个符号展开成两个
        assert_eq!(Normalizer::normalize("\u{02A7}a"), "t\u{0283}a");
    }

    #[test]
    fn test_whitespace_canonicalized() {
        assert_eq!(Normalizer::normalize("a\tb\u{00A0}c\n"), "a b c ");
    }

    #[test]
    fn test_eliminate_whole_string() {
        assert_eq!(Normalizer::normalize("abc-"), "");
        assert_eq!(Normalizer::normalize("a_b"), "");
        assert_eq!(Normalizer::normalize("pa\u{032C}t ok"), "");
    }

    #[test]
    fn test_truncate_at_first_marker() {
        assert_eq!(Normalizer::normalize("abc, def"), "abc");
        assert_eq!(Normalizer::normalize("ab~cd,ef"), "ab");
        assert_eq!(Normalizer::normalize(",abc"), "");
    }

    #[test]
    fn test_eliminate_checked_before_truncate() {
        // 淘汰符在截断点之后也会淘汰整条
        assert_eq!(Normalizer::normalize("ab, c-d"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "\u{02C8}t\u{02B0}\u{00E6}\u{014B}k",
            "a\u{0303}\u{030A}",
            "[pa\u{0308}\u{0325}]",
            "/\u{025A}\u{02A4}/ (gloss)",
            "x:y\u{2003}z",
            "\u{1E37}\u{0304}, rest",
            "\u{0287}\u{02D4}\u{033A}",
        ];
        for sample in samples {
            let once = Normalizer::normalize(sample);
            assert_eq!(Normalizer::normalize(&once), once, "{:?}", sample);
        }
    }
}
