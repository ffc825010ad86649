//! # 单文件处理器
//!
//! 读取 → 识别编码 → 替换 → 分配输出路径 → 以 UTF-8 写出。
//! 任何一步的错误都被转换为失败结果，不会中断批处理。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 通过 `BatchRunner` 调用
//! - 使用 `encoding/`, `substitution/`, `batch/placer.rs`

use super::placer::OutputPlacer;
use crate::encoding::{EncodingResolver, OUTPUT_ENCODING};
use crate::error::{Result, TextSwapError};
use crate::models::{FileReport, ProcessResult};
use crate::substitution::{self, RuleSet};

use std::fs;
use std::io::Write;
use std::path::Path;

/// 单文件处理器
///
/// 不持有可变状态，可在多个线程间共享。
pub struct FileProcessor<'a> {
    rules: &'a RuleSet,
    resolver: &'a EncodingResolver,
    placer: &'a OutputPlacer,
}

impl<'a> FileProcessor<'a> {
    pub fn new(rules: &'a RuleSet, resolver: &'a EncodingResolver, placer: &'a OutputPlacer) -> Self {
        Self {
            rules,
            resolver,
            placer,
        }
    }

    /// 处理单个文件
    pub fn process(&self, source: &Path) -> ProcessResult {
        match self.try_process(source) {
            Ok(report) => ProcessResult::Success(report),
            Err(e) => ProcessResult::failed(source, e.to_string()),
        }
    }

    fn try_process(&self, source: &Path) -> Result<FileReport> {
        let raw = fs::read(source).map_err(|e| TextSwapError::FileReadError {
            path: source.display().to_string(),
            source: e,
        })?;

        let resolved = self.resolver.resolve(&raw);
        let substituted = substitution::apply(&resolved.text, self.rules);

        let (new_file, mut out) = self.placer.reserve(source)?;
        out.write_all(substituted.text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| TextSwapError::FileWriteError {
                path: new_file.display().to_string(),
                source: e,
            })?;

        Ok(FileReport {
            file: source.to_path_buf(),
            new_file,
            replacements: substituted.records,
            encoding_used: resolved.encoding,
            encoding_written: OUTPUT_ENCODING,
        })
    }
}
