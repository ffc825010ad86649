//! # process 子命令 CLI 定义
//!
//! 批量替换文本文件，输出写入源文件旁的子目录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use super::rules::RuleArgs;
use crate::batch::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_FOLDER};

use clap::Args;
use std::path::PathBuf;

/// process 子命令参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Text files to process
    #[arg(long, num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Process every matching file inside this folder (repeatable)
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Recurse into subdirectories of --dir folders
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// JSON request document with "files" and "replacements"
    #[arg(long, value_name = "FILE", conflicts_with_all = ["replacements", "preset"])]
    pub json_input: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Name of the output folder created next to each source file
    #[arg(long, env = "TEXTSWAP_OUTPUT_FOLDER", default_value = DEFAULT_OUTPUT_FOLDER)]
    pub output_folder: String,

    /// Extension a file must have to be processed
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "TEXTSWAP_JOBS", default_value_t = 1)]
    pub jobs: usize,

    /// Print a per-file summary table on stderr
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}
