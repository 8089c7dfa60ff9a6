// 训练/验证/测试集切分
//
// 每行独立抽取 [0, 9] 的均匀整数：
// - 0 → 验证集
// - 1 → 测试集（未指定测试集时落入训练集）
// - 其余 → 训练集
// 这是近似比例（80/10/10 或 90/10），不是精确切分

use rand::Rng;
use std::io::{BufRead, Write};

/// 行去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitTarget {
    Train,
    Validation,
    Test,
}

/// 根据抽取值决定去向
pub fn route(draw: u32, has_test: bool) -> SplitTarget {
    match draw {
        0 => SplitTarget::Validation,
        1 if has_test => SplitTarget::Test,
        _ => SplitTarget::Train,
    }
}

/// 各集合行数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitCounts {
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

impl SplitCounts {
    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

/// 逐行切分，行内容（含换行符）原样写出
pub fn split_lines<R, G>(
    mut input: R,
    train: &mut dyn Write,
    validation: &mut dyn Write,
    mut test: Option<&mut dyn Write>,
    rng: &mut G,
) -> std::io::Result<SplitCounts>
where
    R: BufRead,
    G: Rng,
{
    let mut counts = SplitCounts::default();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let draw = rng.gen_range(0..=9);
        match route(draw, test.is_some()) {
            SplitTarget::Validation => {
                validation.write_all(line.as_bytes())?;
                counts.validation += 1;
            }
            SplitTarget::Test => {
                if let Some(out) = test.as_deref_mut() {
                    out.write_all(line.as_bytes())?;
                }
                counts.test += 1;
            }
            SplitTarget::Train => {
                train.write_all(line.as_bytes())?;
                counts.train += 1;
            }
        }
    }

    Ok(counts)
}
