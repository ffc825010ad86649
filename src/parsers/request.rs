//! # 请求文档解析
//!
//! 宿主进程通过 JSON 请求文档传入文件列表和替换规则：
//!
//! ```json
//! { "files": ["a.txt", "b.txt"], "replacements": { "old": "new", "gone": "" } }
//! ```
//!
//! 两个字段均可省略。`replacements` 的键顺序即规则顺序。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `serde_json`

use crate::error::{Result, TextSwapError};
use crate::substitution::RuleSet;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 请求文档
#[derive(Debug, Default, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub replacements: RuleSet,
}

/// 读取请求文档（UTF-8）
pub fn load_request(path: &Path) -> Result<Request> {
    let content = fs::read_to_string(path).map_err(|e| TextSwapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_request(&content)
}

/// 解析请求文档内容
pub fn parse_request(content: &str) -> Result<Request> {
    serde_json::from_str(content).map_err(|e| TextSwapError::JsonError {
        what: "request document".to_string(),
        source: e,
    })
}

/// 解析命令行传入的替换规则 JSON 对象
pub fn parse_replacements(json: &str) -> Result<RuleSet> {
    serde_json::from_str(json).map_err(|e| TextSwapError::JsonError {
        what: "replacements JSON".to_string(),
        source: e,
    })
}
