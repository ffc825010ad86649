//! # textswap - 文本文件批量字面替换工具
//!
//! 读取编码未知的文本文件（UTF-8、Windows 代码页、泰文、中日文旧编码），
//! 识别最合适的编码后应用字面替换规则，并以 UTF-8 写入源文件旁的输出子目录，
//! 原文件保持不变。
//!
//! ## 子命令
//! - `process` - 批量处理 .txt 文件，结果以 JSON 输出
//! - `convert` - 对单段文本应用替换规则
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── batch/        (收集、路径分配、单文件处理、批量执行)
//!   │     ├── encoding/     (编码识别)
//!   │     ├── substitution/ (规则集与替换引擎)
//!   │     ├── parsers/      (请求文档、预设文件)
//!   │     └── models/       (结果数据模型)
//!   ├── utils/        (输出与进度条)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod encoding;
mod error;
mod models;
mod parsers;
mod substitution;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::output::set_quiet(cli.quiet);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
