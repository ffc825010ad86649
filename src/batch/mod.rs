//! # 批量处理模块
//!
//! 提供文件批量替换的完整流程。
//!
//! ## 功能
//! - 从目录收集文本文件
//! - 资格检查与按序执行（可并行）
//! - 单文件处理：编码识别、替换、输出路径分配、写出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod placer;
pub mod processor;
pub mod runner;

pub use collector::FileCollector;
pub use placer::{first_free_path, OutputPlacer, DEFAULT_OUTPUT_FOLDER};
pub use processor::FileProcessor;
pub use runner::{BatchResult, BatchRunner, DEFAULT_EXTENSION};
