// 语料过滤
//
// 两遍处理，不能流式输出：是否保留某个语言取决于全语料的样本数
// - 第一遍：解析、规范化、分词、去重，统计 token 与语言样本数
// - 第二遍：只输出样本数达到阈值的语言

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::BufRead;

use crate::config::ProcessConfig;
use crate::ipa::{Normalizer, RawRecord, TaggedTokenSequence, Tokenizer};

/// 解析一行输入：`TAG<分隔符>TEXT`
///
/// 缺少分隔符时返回 None；多余字段忽略
pub fn parse_record(line: &str, delimiter: &str) -> Option<RawRecord> {
    let mut fields = line.split(delimiter);
    let tag = fields.next()?;
    let text = fields.next()?;
    Some(RawRecord {
        tag: tag.to_string(),
        text: text.to_string(),
    })
}

/// 全语料统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStatistics {
    /// token → 出现次数（按码位排序）
    pub token_counts: BTreeMap<String, usize>,
    /// 语言标签 → 去重后样本数（过滤前）
    pub tag_counts: BTreeMap<String, usize>,
}

impl CorpusStatistics {
    fn record(&mut self, sequence: &TaggedTokenSequence) {
        for token in &sequence.tokens {
            *self.token_counts.entry(token.text.clone()).or_insert(0) += 1;
        }
        *self.tag_counts.entry(sequence.tag.clone()).or_insert(0) += 1;
    }
}

/// 读取阶段计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// 读取的行数
    pub lines: usize,
    /// 格式错误（缺少分隔符）而丢弃的行
    pub malformed: usize,
    /// 语言被排除的行
    pub excluded: usize,
    /// 规范化后为空的行
    pub empty: usize,
    /// 分词成功的候选数（去重前）
    pub candidates: usize,
    /// 因重复被丢弃的候选数
    pub duplicates: usize,
}

/// 过滤结果
#[derive(Debug, Clone)]
pub struct FilteredCorpus {
    /// 保留的序列，保持输入顺序
    pub sequences: Vec<TaggedTokenSequence>,
    /// 达到阈值的语言
    pub allowlist: BTreeSet<String>,
    /// 第一遍统计（过滤前）
    pub statistics: CorpusStatistics,
}

/// 语料过滤器
///
/// 先反复调用 [`CorpusFilter::ingest`] 完成第一遍，再用 [`CorpusFilter::finish`] 完成第二遍
pub struct CorpusFilter {
    tokenizer: Tokenizer,
    excluded_markers: Vec<String>,
    candidates: Vec<TaggedTokenSequence>,
    seen: HashSet<(String, String)>,
    statistics: CorpusStatistics,
    summary: IngestSummary,
}

impl CorpusFilter {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.tokenizer_options()),
            excluded_markers: config
                .excluded_language_markers
                .iter()
                .map(|marker| marker.to_lowercase())
                .collect(),
            candidates: Vec::new(),
            seen: HashSet::new(),
            statistics: CorpusStatistics::default(),
            summary: IngestSummary::default(),
        }
    }

    /// 语言标签是否被排除（不区分大小写的子串匹配）
    pub fn is_excluded_language(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.excluded_markers
            .iter()
            .any(|marker| tag.contains(marker.as_str()))
    }

    /// 第一遍：处理一条记录
    pub fn ingest(&mut self, record: &RawRecord) {
        if self.is_excluded_language(&record.tag) {
            self.summary.excluded += 1;
            return;
        }

        let normalized = Normalizer::normalize(&record.text);
        if normalized.is_empty() {
            self.summary.empty += 1;
            return;
        }

        for unit in normalized.split_whitespace() {
            let tokens = self.tokenizer.tokenize(unit, &record.tag);
            if tokens.is_empty() {
                continue;
            }
            self.summary.candidates += 1;
            self.push_candidate(TaggedTokenSequence::new(tokens, record.tag.as_str()));
        }
    }

    /// 第一遍：逐行读取
    ///
    /// 行格式错误只计数不报错；读取失败直接返回错误
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R, delimiter: &str) -> Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("读取第 {} 行失败", index + 1))?;
            self.summary.lines += 1;
            match parse_record(&line, delimiter) {
                Some(record) => self.ingest(&record),
                None => {
                    tracing::debug!("第 {} 行缺少分隔符，跳过", index + 1);
                    self.summary.malformed += 1;
                }
            }
        }
        Ok(())
    }

    /// 去重键：拼接后的表层形式 + 标签，先出现者保留
    fn push_candidate(&mut self, sequence: TaggedTokenSequence) {
        let key = (sequence.surface(), sequence.tag.clone());
        if !self.seen.insert(key) {
            self.summary.duplicates += 1;
            return;
        }
        self.statistics.record(&sequence);
        self.candidates.push(sequence);
    }

    pub fn summary(&self) -> IngestSummary {
        self.summary
    }

    pub fn statistics(&self) -> &CorpusStatistics {
        &self.statistics
    }

    /// 第二遍：只保留样本数 ≥ `min_count` 的语言
    pub fn finish(self, min_count: usize) -> FilteredCorpus {
        let allowlist: BTreeSet<String> = self
            .statistics
            .tag_counts
            .iter()
            .filter(|(_, count)| **count >= min_count)
            .map(|(tag, _)| tag.clone())
            .collect();

        let total = self.candidates.len();
        let sequences: Vec<TaggedTokenSequence> = self
            .candidates
            .into_iter()
            .filter(|sequence| allowlist.contains(&sequence.tag))
            .collect();

        tracing::info!(
            "语言 {} 个，保留 {} 个（阈值 {}）；样本 {} 条，保留 {} 条",
            self.statistics.tag_counts.len(),
            allowlist.len(),
            min_count,
            total,
            sequences.len()
        );

        FilteredCorpus {
            sequences,
            allowlist,
            statistics: self.statistics,
        }
    }
}
