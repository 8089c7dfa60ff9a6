// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ipa::{TokenizerOptions, DEFAULT_MIN_LENGTH, DEFAULT_PIPE_TRUNCATION_TAG};

// ============================================================================
// 处理配置
// ============================================================================

/// 语料处理配置
///
/// 可从 JSON 文件加载，缺失字段使用默认值；最少语言样本数由命令行给出，不在此处
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// 输入行中分隔语言标签与转写的符号
    #[serde(default = "default_record_delimiter")]
    pub record_delimiter: String,
    /// 输出中 token 与标签之间的分隔符（OpenNMT 特征分隔符）
    #[serde(default = "default_feature_delimiter")]
    pub feature_delimiter: String,
    /// 每条转写最少 token 数
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// 把 `|` 当作 `/` 处理的语言标签
    #[serde(default = "default_pipe_truncation_tag")]
    pub pipe_truncation_tag: String,
    /// 语言标签中出现这些子串（不区分大小写）则整行丢弃：
    /// 构拟语言、原始语、古代语言、人造语言
    #[serde(default = "default_excluded_language_markers")]
    pub excluded_language_markers: Vec<String>,
}

fn default_record_delimiter() -> String {
    "⦀".to_string()
}

fn default_feature_delimiter() -> String {
    "￨".to_string()
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_pipe_truncation_tag() -> String {
    DEFAULT_PIPE_TRUNCATION_TAG.to_string()
}

fn default_excluded_language_markers() -> Vec<String> {
    [
        "old",
        "middle",
        "classical",
        "gothic",
        "proto",
        "esperanto",
        "ido",
        "lojban",
        "interlingua",
        "volap",
        "toki",
        "translingual",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            record_delimiter: default_record_delimiter(),
            feature_delimiter: default_feature_delimiter(),
            min_length: default_min_length(),
            pipe_truncation_tag: default_pipe_truncation_tag(),
            excluded_language_markers: default_excluded_language_markers(),
        }
    }
}

impl ProcessConfig {
    /// 从 JSON 文件加载配置
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("加载处理配置: {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {:?}", path))?;
        let config: ProcessConfig = serde_json::from_str(&content)
            .with_context(|| format!("配置文件格式错误 {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// 有路径则加载，否则使用默认配置
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_delimiter.is_empty() {
            anyhow::bail!("record_delimiter 不能为空");
        }
        if self.min_length == 0 {
            anyhow::bail!("min_length 必须大于 0");
        }
        Ok(())
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            min_length: self.min_length,
            pipe_truncation_tag: self.pipe_truncation_tag.clone(),
        }
    }
}
