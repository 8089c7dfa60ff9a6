// 输出
//
// - 数据集：每条序列一行，token 后接特征分隔符和语言标签
// - 诊断：token 频次表 + 汇总，写到标准输出
// - 可选 JSON 统计报告

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::corpus::{CorpusStatistics, FilteredCorpus};
use crate::ipa::TaggedTokenSequence;

/// 格式化一条序列：`tok￨TAG tok￨TAG ...`
///
/// 标签内部的空白全部去掉
pub fn format_line(sequence: &TaggedTokenSequence, feature_delimiter: &str) -> String {
    let tag: String = sequence
        .tag
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    sequence
        .tokens
        .iter()
        .map(|token| format!("{}{}{}", token.as_str(), feature_delimiter, tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 写出所有序列
pub fn write_sequences<W: Write>(
    writer: &mut W,
    sequences: &[TaggedTokenSequence],
    feature_delimiter: &str,
) -> std::io::Result<usize> {
    for sequence in sequences {
        writeln!(writer, "{}", format_line(sequence, feature_delimiter))?;
    }
    Ok(sequences.len())
}

/// 原子写入数据集文件：先写同目录临时文件，全部成功后再替换目标
pub fn write_corpus_file(
    path: &Path,
    corpus: &FilteredCorpus,
    feature_delimiter: &str,
) -> Result<usize> {
    // 输出目录必须已存在
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("无法在 {:?} 创建临时文件", parent_dir))?;
    let written = {
        let mut writer = BufWriter::new(temp_file.as_file());
        let written = write_sequences(&mut writer, &corpus.sequences, feature_delimiter)?;
        writer.flush()?;
        written
    };

    temp_file
        .persist(path)
        .with_context(|| format!("无法写入输出文件 {:?}", path))?;
    tracing::info!("写出 {} 行到 {:?}", written, path);
    Ok(written)
}

/// 打印诊断信息：每个 token 的频次（按码位排序），然后是总 token 数和保留的语言数
pub fn print_diagnostics<W: Write>(out: &mut W, corpus: &FilteredCorpus) -> std::io::Result<()> {
    for (token, count) in &corpus.statistics.token_counts {
        writeln!(out, "{}\t{}", token, count)?;
    }
    writeln!(out, "Total Tokens: {}", corpus.statistics.token_counts.len())?;
    writeln!(out, "Total Languages: {}", corpus.allowlist.len())?;
    Ok(())
}

/// JSON 统计报告
#[derive(Debug, Serialize)]
struct CorpusReport<'a> {
    #[serde(flatten)]
    statistics: &'a CorpusStatistics,
    allowlist: &'a BTreeSet<String>,
    /// 输出的序列数
    sequences: usize,
}

/// 写出 JSON 统计报告
pub fn write_report(path: &Path, corpus: &FilteredCorpus) -> Result<()> {
    let report = CorpusReport {
        statistics: &corpus.statistics,
        allowlist: &corpus.allowlist,
        sequences: corpus.sequences.len(),
    };
    let content = serde_json::to_string_pretty(&report)?;
    fs::write(path, content).with_context(|| format!("无法写入统计报告 {:?}", path))?;
    tracing::info!("统计报告已保存到 {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipa::Token;
    use std::collections::BTreeMap;

    fn sample_corpus() -> FilteredCorpus {
        let sequences = vec![
            TaggedTokenSequence::new(
                vec![Token::symbol('a'), Token::boundary(), Token::symbol('b')],
                "Old Norse",
            ),
            TaggedTokenSequence::new(vec![Token::symbol('c'), Token::symbol('a')], "X"),
        ];
        let mut token_counts = BTreeMap::new();
        token_counts.insert("b".to_string(), 1);
        token_counts.insert("a".to_string(), 2);
        token_counts.insert("#".to_string(), 1);
        token_counts.insert("\u{0283}".to_string(), 1);
        token_counts.insert("c".to_string(), 1);
        let mut tag_counts = BTreeMap::new();
        tag_counts.insert("Old Norse".to_string(), 1);
        tag_counts.insert("X".to_string(), 1);
        tag_counts.insert("Z".to_string(), 1);
        let allowlist: BTreeSet<String> = ["Old Norse", "X"].into_iter().map(String::from).collect();

        FilteredCorpus {
            sequences,
            allowlist,
            statistics: CorpusStatistics {
                token_counts,
                tag_counts,
            },
        }
    }

    #[test]
    fn test_format_line() {
        let corpus = sample_corpus();
        assert_eq!(
            format_line(&corpus.sequences[0], "￨"),
            "a￨OldNorse #￨OldNorse b￨OldNorse"
        );
        assert_eq!(format_line(&corpus.sequences[1], "|"), "c|X a|X");
    }

    #[test]
    fn test_diagnostics_sorted_by_code_point() {
        let corpus = sample_corpus();
        let mut out = Vec::new();
        print_diagnostics(&mut out, &corpus).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "#\t1",
                "a\t2",
                "b\t1",
                "c\t1",
                "\u{0283}\t1",
                "Total Tokens: 5",
                "Total Languages: 2",
            ]
        );
    }

    #[test]
    fn test_write_corpus_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let corpus = sample_corpus();

        let written = write_corpus_file(&path, &corpus, "￨").unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a￨OldNorse #￨OldNorse b￨OldNorse\nc￨X a￨X\n");
    }

    #[test]
    fn test_write_corpus_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nested");
        let path = missing.join("out.txt");

        assert!(write_corpus_file(&path, &sample_corpus(), "￨").is_err());
        // 不会自动创建目录
        assert!(!missing.exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_literal_hash_same_surface_as_boundary() {
        // 输入中的 # 是普通符号，输出时与词边界写法相同
        let sequence = TaggedTokenSequence::new(
            vec![Token::symbol('a'), Token::symbol('#'), Token::boundary(), Token::symbol('b')],
            "X",
        );
        assert!(!sequence.tokens[1].is_boundary());
        assert_eq!(format_line(&sequence, "￨"), "a￨X #￨X #￨X b￨X");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(&path, &sample_corpus()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["token_counts"]["a"], 2);
        assert_eq!(value["tag_counts"]["Z"], 1);
        assert_eq!(value["allowlist"].as_array().unwrap().len(), 2);
        assert_eq!(value["sequences"], 2);
    }
}
