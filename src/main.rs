// IPA 语料处理工具：规范化、分词、过滤并输出带语言标签的训练数据
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use ipa_corpus_lib::config::ProcessConfig;
use ipa_corpus_lib::{emitter, init_logging, process_corpus};

/// 规范化、分词并按语言样本数过滤 IPA 转写语料
#[derive(Parser, Debug)]
#[command(name = "ipa-corpus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 输入文件（每行 TAG⦀TRANSCRIPTION）
    input: PathBuf,

    /// 输出文件
    output: PathBuf,

    /// 语言最少样本数，不足的语言整体丢弃
    min_count: usize,

    /// JSON 处理配置（缺省使用内置默认值）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 额外写出 JSON 统计报告
    #[arg(long)]
    report: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ProcessConfig::load_or_default(cli.config.as_deref())?;
    let corpus = process_corpus(&cli.input, &cli.output, cli.min_count, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emitter::print_diagnostics(&mut out, &corpus)?;
    out.flush()?;

    if let Some(report) = &cli.report {
        emitter::write_report(report, &corpus)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_three_positionals() {
        let cli = Cli::try_parse_from(["ipa-corpus", "in.txt", "out.txt", "5"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.min_count, 5);
        assert!(cli.config.is_none());
        assert!(cli.report.is_none());
    }

    #[test]
    fn test_cli_rejects_wrong_arity() {
        let err = Cli::try_parse_from(["ipa-corpus", "in.txt", "out.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);

        let err = Cli::try_parse_from(["ipa-corpus", "in.txt", "out.txt", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_cli_rejects_non_integer_min_count() {
        let err = Cli::try_parse_from(["ipa-corpus", "in.txt", "out.txt", "two"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
