//! # 字面替换模块
//!
//! 有序规则集与顺序替换引擎。只做精确子串匹配：
//! 无正则语义，不考虑词边界，也不做大小写折叠。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/`, `parsers/` 使用
//! - 子模块: rules, engine

pub mod engine;
pub mod rules;

pub use engine::{apply, Operation, Substitution, SubstitutionRecord};
pub use rules::{RuleSet, SubstitutionRule};
