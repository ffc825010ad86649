//! # 处理结果数据模型
//!
//! 单个文件的处理结果以及批处理的响应文档。
//! 序列化格式与宿主进程约定的 JSON 字段一致：
//!
//! ```text
//! { "success": true,  "file": ..., "new_file": ..., "replacements": [...],
//!   "encoding_used": ..., "encoding_written": "utf-8" }
//! { "success": false, "file": ..., "error": ... }
//! ```
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/process.rs` 使用
//! - 使用 `encoding/`, `substitution/` 的类型

use crate::encoding::EncodingDescriptor;
use crate::substitution::SubstitutionRecord;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::path::{Path, PathBuf};

/// 成功处理的文件报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// 源文件
    pub file: PathBuf,
    /// 输出文件
    pub new_file: PathBuf,
    /// 实际发生的替换（按规则顺序）
    pub replacements: Vec<SubstitutionRecord>,
    /// 读取源文件使用的编码
    pub encoding_used: EncodingDescriptor,
    /// 写入输出文件使用的编码
    pub encoding_written: &'static str,
}

impl FileReport {
    /// 所有规则的替换总次数
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(FileReport),
    /// 处理失败
    Failed { file: PathBuf, error: String },
}

impl ProcessResult {
    /// 创建失败结果
    pub fn failed(file: &Path, error: impl Into<String>) -> Self {
        ProcessResult::Failed {
            file: file.to_path_buf(),
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Success(_))
    }

    /// 源文件路径
    pub fn file(&self) -> &Path {
        match self {
            ProcessResult::Success(report) => &report.file,
            ProcessResult::Failed { file, .. } => file,
        }
    }
}

impl Serialize for ProcessResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProcessResult::Success(report) => {
                let mut state = serializer.serialize_struct("ProcessResult", 6)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("file", &report.file.display().to_string())?;
                state.serialize_field("new_file", &report.new_file.display().to_string())?;
                state.serialize_field("replacements", &report.replacements)?;
                state.serialize_field("encoding_used", &report.encoding_used)?;
                state.serialize_field("encoding_written", report.encoding_written)?;
                state.end()
            }
            ProcessResult::Failed { file, error } => {
                let mut state = serializer.serialize_struct("ProcessResult", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("file", &file.display().to_string())?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

/// 顶层响应文档
#[derive(Debug)]
pub enum Response {
    /// 请求已执行（单个文件的失败不影响顶层成功标志）
    Completed(Vec<ProcessResult>),
    /// 请求本身无效
    Aborted(String),
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        match self {
            Response::Completed(results) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("results", results)?;
            }
            Response::Aborted(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}
