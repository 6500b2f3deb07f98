use std::path::PathBuf;

use crate::fixture::FixtureError;
use crate::parser::ParseError;

/// 单个 fixture 被跳过的原因
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// 读取或解码 fixture 失败，或缺少 curl 字段
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// curl 命令无法转换为请求
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// 被跳过的 fixture 及原因
#[derive(Debug)]
pub struct SkippedFixture {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// 一次转换的统计
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// 发现的候选 fixture 数
    pub discovered: usize,

    /// 成功写入集合的条目数
    pub converted: usize,

    pub skipped: Vec<SkippedFixture>,

    /// 输出文件（写入成功后才有值）
    pub output: Option<PathBuf>,
}

impl ConversionSummary {
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Self::default()
        }
    }

    pub fn record_converted(&mut self) {
        self.converted += 1;
    }

    pub fn record_skipped(&mut self, path: PathBuf, reason: impl Into<SkipReason>) {
        self.skipped.push(SkippedFixture {
            path,
            reason: reason.into(),
        });
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn all_converted(&self) -> bool {
        self.skipped.is_empty()
    }
}
