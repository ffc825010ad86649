//! # 输入解析模块
//!
//! 解析宿主进程的请求文档、命令行规则 JSON 和导出的预设文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: request, preset

pub mod preset;
pub mod request;

pub use preset::{load_preset, PresetFile, RuleMode};
pub use request::{load_request, parse_replacements, Request};
