//! # 文件收集器
//!
//! 从目录中收集待处理的文本文件。
//!
//! ## 功能
//! - 按扩展名匹配（不区分大小写，例如 `*.txt` 也匹配 `NOTES.TXT`）
//! - 默认只收集目录第一层，可选递归
//! - 结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{Result, TextSwapError};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    dir: PathBuf,
    /// 文件名匹配模式
    pattern: Pattern,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建收集指定扩展名文件的收集器
    pub fn new(dir: PathBuf, extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        let pattern = Pattern::new(&format!("*.{}", Pattern::escape(extension))).map_err(|e| {
            TextSwapError::InvalidArgument(format!("Invalid extension '{}': {}", extension, e))
        })?;

        Ok(Self {
            dir,
            pattern,
            recursive: false,
        })
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(TextSwapError::FileNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.into_path())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配
    fn matches(&self, path: &Path) -> bool {
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };

        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.pattern.matches_with(name, options))
    }
}
