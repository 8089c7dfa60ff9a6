//! IPA 语料预处理
//!
//! 把多语言音标转写整理成序列模型训练数据：
//! 规范化 → 分词 → 全语料去重与语言样本数过滤 → 带标签输出

pub mod config;
pub mod corpus;
pub mod emitter;
pub mod ipa;
pub mod splitter;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::Level;

use config::ProcessConfig;
use corpus::{CorpusFilter, FilteredCorpus};

/// 初始化日志（写到 stderr，stdout 留给诊断输出）
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// 完整处理一个语料文件
///
/// 输入读取失败时不会产生输出文件
pub fn process_corpus(
    input: &Path,
    output: &Path,
    min_count: usize,
    config: &ProcessConfig,
) -> Result<FilteredCorpus> {
    tracing::info!("读取语料: {:?}", input);
    let file = File::open(input).with_context(|| format!("无法打开输入文件 {:?}", input))?;

    let mut filter = CorpusFilter::new(config);
    filter
        .ingest_reader(BufReader::new(file), &config.record_delimiter)
        .with_context(|| format!("读取输入文件失败 {:?}", input))?;

    let summary = filter.summary();
    tracing::info!(
        "共 {} 行：格式错误 {}，排除语言 {}，规范化后为空 {}；候选 {} 条，重复 {} 条",
        summary.lines,
        summary.malformed,
        summary.excluded,
        summary.empty,
        summary.candidates,
        summary.duplicates
    );

    let corpus = filter.finish(min_count);
    emitter::write_corpus_file(output, &corpus, &config.feature_delimiter)?;
    Ok(corpus)
}
