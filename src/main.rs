use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use curation_text_lib::{format_file_size, AppConfig, TextEngine, Transform};

/// 标题/引文文本规范化工具
#[derive(Parser, Debug)]
#[command(name = "curation-text", version, about)]
struct Cli {
    /// 配置文件路径（默认使用系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 提高日志级别
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 按顺序应用文本转换（未给出文本时逐行读取 stdin）
    Apply {
        /// 转换，可重复；未指定时使用配置中的默认序列
        #[arg(short, long = "transform", value_enum)]
        transforms: Vec<Transform>,

        text: Vec<String>,
    },
    /// 格式化文件大小
    Size {
        #[arg(required = true)]
        bytes: Vec<u64>,
    },
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn run_apply(engine: &TextEngine, transforms: &[Transform], text: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("读取 stdin 失败")?;
            writeln!(out, "{}", engine.apply_all(transforms, &line).text)?;
        }
    } else {
        for item in text {
            writeln!(out, "{}", engine.apply_all(transforms, item).text)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Apply { transforms, text } => {
            let config = load_config(cli.config.as_ref())?;
            let engine = TextEngine::from_config(&config);
            let transforms: Vec<Transform> = if transforms.is_empty() {
                engine.default_transforms().to_vec()
            } else {
                transforms
            };
            tracing::debug!("执行转换: {:?}", transforms);
            run_apply(&engine, &transforms, &text)?;
        }
        Command::Size { bytes } => {
            for value in bytes {
                println!("{}", format_file_size(value));
            }
        }
    }

    Ok(())
}
