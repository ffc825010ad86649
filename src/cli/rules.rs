//! # 替换规则来源参数
//!
//! `process` 与 `convert` 共用：规则可以来自命令行 JSON 或预设文件。
//!
//! ## 依赖关系
//! - 被 `cli/process.rs`, `cli/convert.rs` 使用
//! - 由 `commands/mod.rs` 解析为规则集

use crate::parsers::RuleMode;

use clap::Args;
use std::path::PathBuf;

/// 规则来源参数
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// JSON object of replacements, e.g. '{"old": "new", "remove me": ""}'
    #[arg(long, value_name = "JSON", conflicts_with = "preset")]
    pub replacements: Option<String>,

    /// Preset file exported from the rule editor
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Profile to use from the preset (defaults to the preset's current profile)
    #[arg(long, requires = "preset")]
    pub profile: Option<String>,

    /// Which preset rules to apply [default: all]
    #[arg(long, value_enum, requires = "preset")]
    pub mode: Option<RuleMode>,
}
