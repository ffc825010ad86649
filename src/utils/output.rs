//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! stdout 留给 JSON 报告和转换后的文本，所有状态信息都写到 stderr。
//! 安静模式下只输出错误。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::substitution::{Operation, SubstitutionRecord};

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// 设置安静模式
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// 是否处于安静模式
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "[OK]".green().bold(), msg);
    }
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
    }
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "[*]".blue().bold(), msg);
    }
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "[DONE]".green().bold(), msg);
    }
}

/// 打印单条替换记录
pub fn print_substitution(record: &SubstitutionRecord) {
    if is_quiet() {
        return;
    }
    match record.operation {
        Operation::Replace => eprintln!(
            "{} {} {} {} {}",
            "[OK]".green().bold(),
            record.old.dimmed(),
            "->".cyan(),
            record.new,
            format!("(x{})", record.count).dimmed()
        ),
        Operation::Delete => eprintln!(
            "{} {} {} {}",
            "[DEL]".magenta().bold(),
            record.old.dimmed(),
            "removed".cyan(),
            format!("(x{})", record.count).dimmed()
        ),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    if is_quiet() {
        return;
    }
    let line = "─".repeat(60);
    eprintln!("\n{}", line.dimmed());
    eprintln!("  {}", title.bold());
    eprintln!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    if !is_quiet() {
        eprintln!("{}", "─".repeat(60).dimmed());
    }
}
