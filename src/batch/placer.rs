//! # 输出路径分配
//!
//! 在源文件旁的固定子目录中为输出文件分配不冲突的路径。
//!
//! ## 规则
//! - 输出目录: `<源文件目录>/<folder_name>`，不存在时创建
//! - 默认文件名与源文件相同；已存在时依次尝试 `name_1.ext`, `name_2.ext`, ...
//! - 同一输出目录的创建、探测和文件创建在目录锁内串行执行，
//!   文件以 create-new 方式打开，已存在的文件绝不会被覆盖
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 和 `commands/convert.rs` 使用

use crate::error::{Result, TextSwapError};

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// 默认输出子目录名
pub const DEFAULT_OUTPUT_FOLDER: &str = "edited_files";

/// 输出路径分配器
#[derive(Debug)]
pub struct OutputPlacer {
    folder_name: String,
    /// 每个输出目录一把锁
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl Default for OutputPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FOLDER)
    }
}

impl OutputPlacer {
    pub fn new(folder_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// 源文件对应的输出目录
    pub fn output_dir(&self, source: &Path) -> PathBuf {
        source
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.folder_name)
    }

    /// 确保输出目录存在，并返回第一个未被占用的输出路径
    pub fn place(&self, source: &Path) -> Result<PathBuf> {
        let dir = self.output_dir(source);
        fs::create_dir_all(&dir).map_err(|e| TextSwapError::DirectoryCreateError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let file_name = source
            .file_name()
            .ok_or_else(|| TextSwapError::InvalidArgument(format!(
                "'{}' has no file name",
                source.display()
            )))?;

        Ok(first_free_path(&dir.join(file_name)))
    }

    /// 分配输出路径并以 create-new 方式创建文件
    ///
    /// 目录锁保证同一目录下的分配互不干扰；若文件在探测后被外部创建，
    /// 则重新探测。
    pub fn reserve(&self, source: &Path) -> Result<(PathBuf, File)> {
        let lock = self.dir_lock(&self.output_dir(source));
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            let path = self.place(source)?;
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(TextSwapError::FileWriteError {
                        path: path.display().to_string(),
                        source: e,
                    })
                }
            }
        }
    }

    fn dir_lock(&self, dir: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(dir.to_path_buf()).or_default().clone()
    }
}

/// 返回 `desired` 本身，或第一个未被占用的 `stem_N.ext`（N 从 1 开始）
pub fn first_free_path(desired: &Path) -> PathBuf {
    let mut candidate = desired.to_path_buf();
    let mut counter = 1usize;
    while candidate.exists() {
        candidate = desired.with_file_name(numbered_name(desired, counter));
        counter += 1;
    }
    candidate
}

/// `stem_N.ext`（无扩展名时为 `stem_N`）
fn numbered_name(source: &Path, counter: usize) -> OsString {
    let mut name = source.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!("_{}", counter));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_dir_is_sibling_of_source() {
        let placer = OutputPlacer::default();
        assert_eq!(
            placer.output_dir(Path::new("/data/in/report.txt")),
            PathBuf::from("/data/in/edited_files")
        );
        assert_eq!(
            placer.output_dir(Path::new("report.txt")),
            PathBuf::from("edited_files")
        );
    }

    #[test]
    fn test_place_creates_directory_and_keeps_name() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("report.txt");
        let placer = OutputPlacer::default();

        let dest = placer.place(&source).unwrap();
        assert_eq!(dest, tmp.path().join("edited_files").join("report.txt"));
        assert!(tmp.path().join("edited_files").is_dir());

        // 目录已存在时再次调用不报错
        assert!(placer.place(&source).is_ok());
    }

    #[test]
    fn test_collisions_get_numeric_suffix() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("report.txt");
        let placer = OutputPlacer::default();
        let out = tmp.path().join("edited_files");

        let (first, _) = placer.reserve(&source).unwrap();
        let (second, _) = placer.reserve(&source).unwrap();
        let (third, _) = placer.reserve(&source).unwrap();

        assert_eq!(first, out.join("report.txt"));
        assert_eq!(second, out.join("report_1.txt"));
        assert_eq!(third, out.join("report_2.txt"));
    }

    #[test]
    fn test_existing_file_is_never_overwritten() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("edited_files");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("report.txt"), "keep me").unwrap();

        let placer = OutputPlacer::default();
        let (dest, _) = placer.reserve(&tmp.path().join("report.txt")).unwrap();

        assert_eq!(dest, out.join("report_1.txt"));
        assert_eq!(fs::read_to_string(out.join("report.txt")).unwrap(), "keep me");
    }

    #[test]
    fn test_first_free_path() {
        let tmp = TempDir::new().unwrap();
        let desired = tmp.path().join("out.txt");
        assert_eq!(first_free_path(&desired), desired);

        fs::write(&desired, "x").unwrap();
        fs::write(tmp.path().join("out_1.txt"), "x").unwrap();
        assert_eq!(first_free_path(&desired), tmp.path().join("out_2.txt"));
    }

    #[test]
    fn test_numbered_name_without_extension() {
        assert_eq!(numbered_name(Path::new("dir/README"), 3), OsString::from("README_3"));
        assert_eq!(
            numbered_name(Path::new("dir/a.b.txt"), 1),
            OsString::from("a.b_1.txt")
        );
    }

    #[test]
    fn test_custom_folder_name() {
        let placer = OutputPlacer::new("out");
        assert_eq!(
            placer.output_dir(Path::new("/x/y.txt")),
            PathBuf::from("/x/out")
        );
    }
}
