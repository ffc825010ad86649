//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `batch/`, `utils/`
//! - 子模块: process, convert

pub mod convert;
pub mod process;

use crate::cli::rules::RuleArgs;
use crate::cli::Commands;
use crate::error::Result;
use crate::parsers::{self, RuleMode};
use crate::substitution::RuleSet;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Process(args) => process::execute(args),
        Commands::Convert(args) => convert::execute(args),
    }
}

/// 根据命令行参数加载规则集（预设文件或内联 JSON，均未提供时为空）
pub fn load_rules(args: &RuleArgs) -> Result<RuleSet> {
    if let Some(path) = &args.preset {
        let preset = parsers::load_preset(path)?;
        let mode = args.mode.unwrap_or(RuleMode::All);
        let (profile, rules) = preset.rules(args.profile.as_deref(), mode, path)?;

        output::print_info(&format!(
            "Preset '{}' (version {}, exported {}): profile '{}', {} rule(s)",
            path.display(),
            preset.version.as_deref().unwrap_or("?"),
            preset.export_date.as_deref().unwrap_or("?"),
            profile,
            rules.len()
        ));
        return Ok(rules);
    }

    match &args.replacements {
        Some(json) => parsers::parse_replacements(json),
        None => Ok(RuleSet::new()),
    }
}
