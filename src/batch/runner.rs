//! # 批量执行器
//!
//! 对输入路径列表逐个调用处理函数，每个路径产生一个结果，顺序与输入一致。
//!
//! ## 功能
//! - 资格检查：路径必须存在且扩展名匹配，否则直接生成失败结果
//! - 基于 rayon 线程池执行（`jobs = 1` 时即为顺序执行）
//! - 单个文件失败不会跳过或中断后续文件
//! - 进度条显示与统计汇总
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行处理

use crate::error::Result;
use crate::models::ProcessResult;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 默认可处理的文件扩展名
pub const DEFAULT_EXTENSION: &str = "txt";

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 每个输入路径一个结果，顺序与输入一致
    pub results: Vec<ProcessResult>,
}

impl BatchResult {
    /// 追加处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        if result.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.results.iter().filter_map(|result| match result {
            ProcessResult::Failed { file, error } => Some((file.as_path(), error.as_str())),
            ProcessResult::Success(_) => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 可处理的扩展名（不含点，区分大小写）
    extension: String,
}

impl BatchRunner {
    /// 创建新的批量执行器（`jobs = 0` 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// 设置可处理的扩展名
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// 路径是否可处理（按文件名后缀比较，`.txt` 本身也可处理）
    pub fn is_eligible(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension);
        path.exists()
            && path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
    }

    /// 处理路径列表
    pub fn run<F>(&self, paths: &[PathBuf], processor: F) -> Result<BatchResult>
    where
        F: Fn(&Path) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(paths.len() as u64, "Processing");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()?;

        // par_iter + collect 保持输入顺序
        let results: Vec<ProcessResult> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = if self.is_eligible(path) {
                        processor(path)
                    } else {
                        ProcessResult::failed(
                            path,
                            format!("File not found or not a .{} file", self.extension),
                        )
                    };
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn echo(path: &Path) -> ProcessResult {
        ProcessResult::failed(path, "processed")
    }

    #[test]
    fn test_ineligible_paths_fail_without_processing() {
        let tmp = TempDir::new().unwrap();
        let valid = tmp.path().join("valid.txt");
        let wrong_ext = tmp.path().join("data.csv");
        fs::write(&valid, "x").unwrap();
        fs::write(&wrong_ext, "x").unwrap();

        let paths = vec![tmp.path().join("missing.txt"), wrong_ext, valid.clone()];
        let result = BatchRunner::new(1).run(&paths, echo).unwrap();

        assert_eq!(result.total(), 3);
        let errors: Vec<_> = result.failures().map(|(_, e)| e.to_string()).collect();
        assert_eq!(
            errors,
            vec![
                "File not found or not a .txt file",
                "File not found or not a .txt file",
                "processed",
            ]
        );
        assert_eq!(result.results[2].file(), valid.as_path());
    }

    #[test]
    fn test_order_is_preserved_in_parallel() {
        let tmp = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..32)
            .map(|i| {
                let path = tmp.path().join(format!("f{}.txt", i));
                fs::write(&path, "x").unwrap();
                path
            })
            .collect();

        let result = BatchRunner::new(4).run(&paths, echo).unwrap();
        let files: Vec<&Path> = result.results.iter().map(|r| r.file()).collect();
        let expected: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_custom_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.md");
        fs::write(&path, "x").unwrap();

        let runner = BatchRunner::new(1).with_extension(".md");
        assert!(runner.is_eligible(&path));
        assert!(!BatchRunner::new(1).is_eligible(&path));
    }

    #[test]
    fn test_bare_extension_file_name_is_eligible() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".txt");
        fs::write(&path, "x").unwrap();
        let no_dot = tmp.path().join("txt");
        fs::write(&no_dot, "x").unwrap();

        assert!(BatchRunner::new(1).is_eligible(&path));
        assert!(!BatchRunner::new(1).is_eligible(&no_dot));
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("LOUD.TXT");
        fs::write(&path, "x").unwrap();
        assert!(!BatchRunner::new(1).is_eligible(&path));
    }
}
