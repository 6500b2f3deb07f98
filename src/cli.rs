use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use curlpost::config::{ConfigLoader, ConvertConfig};
use curlpost::runner::{ConversionReporter, Converter};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// 不带参数运行时：读取 ./keploy 下的 fixture，写出 ./output.json
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// fixture 根目录（默认 keploy）
    #[arg(long, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// 输出文件（默认 output.json）
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 配置文件（默认向上查找 curlpost.toml）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 列出每个被跳过的 fixture
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    pub fn apply(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(ref dir) = self.fixtures {
            config.fixture_dir = dir.clone();
        }
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        config
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = ConfigLoader::load(cli.config.as_deref(), &cwd)?;
    let config = cli.apply(config);

    let summary = Converter::new(config)
        .run()
        .context("Conversion failed, no output written")?;

    ConversionReporter::new(cli.verbose).print_summary(&summary);
    Ok(())
}
