//! # 统一错误处理模块
//!
//! 定义 textswap 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的错误在 `batch/processor.rs` 中被转换为失败结果，不会中断批处理；
//! 只有请求级别的错误（参数、请求文档、预设文件）才会传播到 `main.rs`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// textswap 统一错误类型
#[derive(Error, Debug)]
pub enum TextSwapError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 请求解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid {what}: {source}")]
    JsonError {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile '{name}' not found in preset {path}")]
    ProfileNotFound { name: String, path: String },

    #[error("Preset {path} has no current profile; choose one with --profile ({available})")]
    AmbiguousProfile { path: String, available: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 并行执行
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TextSwapError>;
