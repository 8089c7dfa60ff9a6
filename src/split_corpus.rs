// 数据集切分工具：按行随机分到训练/验证/（可选）测试集
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ipa_corpus_lib::init_logging;
use ipa_corpus_lib::splitter::split_lines;

/// 把处理好的语料按 80/10/10（或 90/10）近似切分
#[derive(Parser, Debug)]
#[command(name = "split-corpus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 处理后的语料
    data: PathBuf,

    /// 训练集输出
    train: PathBuf,

    /// 验证集输出
    validation: PathBuf,

    /// 测试集输出（可选，不指定时这部分并入训练集）
    test: Option<PathBuf>,

    /// 随机种子，指定后结果可复现
    #[arg(long)]
    seed: Option<u64>,
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("无法创建 {:?}", path))?;
    Ok(BufWriter::new(file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(false);

    let input = File::open(&cli.data).with_context(|| format!("无法打开 {:?}", cli.data))?;
    let mut train = create(&cli.train)?;
    let mut validation = create(&cli.validation)?;
    let mut test = cli.test.as_deref().map(create).transpose()?;

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let counts = split_lines(
        BufReader::new(input),
        &mut train,
        &mut validation,
        test.as_mut().map(|w| w as &mut dyn Write),
        &mut rng,
    )?;

    train.flush()?;
    validation.flush()?;
    if let Some(test) = test.as_mut() {
        test.flush()?;
    }

    tracing::info!(
        "切分完成：训练 {}，验证 {}，测试 {}",
        counts.train,
        counts.validation,
        counts.test
    );
    Ok(())
}
