//! # convert 命令实现
//!
//! 文本模式：对单段文本应用替换规则。
//!
//! ## 功能
//! - 从文件或 stdin 读取原始字节，经编码识别后解码
//! - 应用替换规则，替换记录输出到 stderr
//! - 结果以 UTF-8 写入指定文件（不覆盖已有文件）或 stdout
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `encoding/`, `substitution/`, `batch/placer.rs`
//! - 使用 `utils/output.rs`

use crate::batch::first_free_path;
use crate::cli::convert::ConvertArgs;
use crate::encoding::EncodingResolver;
use crate::error::{Result, TextSwapError};
use crate::substitution;
use crate::utils::output;

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const STDIN_NAME: &str = "<stdin>";
const STDOUT_NAME: &str = "<stdout>";

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let rules = super::load_rules(&args.rules)?;

    let raw = read_input(args.input.as_deref())?;
    let resolved = EncodingResolver::default().resolve(&raw);
    output::print_info(&format!("Input decoded as {}", resolved.encoding));

    let converted = substitution::apply(&resolved.text, &rules);
    for record in &converted.records {
        output::print_substitution(record);
    }
    if converted.records.is_empty() {
        output::print_warning("No rule matched the input text.");
    }

    match &args.output {
        Some(path) => {
            let written = write_new_file(path, &converted.text)?;
            if written != *path {
                output::print_warning(&format!(
                    "'{}' already exists, wrote '{}' instead",
                    path.display(),
                    written.display()
                ));
            }
            output::print_done(&format!("Saved to '{}'", written.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(converted.text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| TextSwapError::FileWriteError {
                    path: STDOUT_NAME.to_string(),
                    source: e,
                })?;
        }
    }

    Ok(())
}

/// 读取输入文件或 stdin 的原始字节
fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path).map_err(|e| TextSwapError::FileReadError {
            path: path.display().to_string(),
            source: e,
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| TextSwapError::FileReadError {
                    path: STDIN_NAME.to_string(),
                    source: e,
                })?;
            Ok(buf)
        }
    }
}

/// 以 create-new 方式写出文本，返回实际写入的路径
fn write_new_file(desired: &Path, text: &str) -> Result<PathBuf> {
    let write_error = |path: &Path, e: io::Error| TextSwapError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    loop {
        let path = first_free_path(desired);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(write_error(&path, e)),
        };
        file.write_all(text.as_bytes())
            .map_err(|e| write_error(&path, e))?;
        return Ok(path);
    }
}
