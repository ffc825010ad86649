//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `process`: 批量处理文本文件，结果以 JSON 输出到 stdout
//! - `convert`: 对单段文本应用替换规则
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process, convert, rules

pub mod convert;
pub mod process;
pub mod rules;

use clap::{Parser, Subcommand};

/// textswap - 文本文件批量字面替换工具
#[derive(Parser)]
#[command(name = "textswap")]
#[command(version)]
#[command(about = "Batch literal word replacement for text files in any legacy encoding", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress informational messages on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply replacements to a batch of .txt files and print a JSON report
    Process(process::ProcessArgs),

    /// Apply replacements to a single text (file or stdin)
    Convert(convert::ConvertArgs),
}
