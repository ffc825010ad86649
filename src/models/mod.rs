//! # 数据模型模块
//!
//! 定义文件处理结果和响应文档。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: report

pub mod report;

pub use report::{FileReport, ProcessResult, Response};
