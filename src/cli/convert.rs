//! # convert 子命令 CLI 定义
//!
//! 对单段文本应用替换规则（文本模式）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::rules::RuleArgs;

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input text file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file, written as UTF-8 (prints to stdout when omitted).
    /// An existing file is never overwritten; a numbered name is used instead.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,
}
