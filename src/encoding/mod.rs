//! # 编码识别模块
//!
//! 从未知编码的原始字节中选出最能还原可读文本的编码，并解码为 `String`。
//!
//! ## 算法
//! 1. 按候选顺序逐个严格解码，失败的候选直接跳过
//! 2. 第一个不含替换字符（U+FFFD）的结果立即采用，后续候选不再尝试
//! 3. 否则保留替换字符最少的结果，数量相同时保留先尝试的候选
//! 4. 所有候选均失败时，回退为有损 UTF-8 解码
//!
//! 该启发式只是尽力而为：同一字节序列可能在多个单字节编码下都"成功"解码，
//! 但含义不同。
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 和 `commands/convert.rs` 使用
//! - 子模块: candidate

pub mod candidate;

pub use candidate::{default_candidates, Attempt, Candidate, REPLACEMENT_CHAR};

use serde::{Serialize, Serializer};
use std::fmt;

/// 输出文件统一使用的编码
pub const OUTPUT_ENCODING: &str = "utf-8";

/// 回退解码的描述名
const FALLBACK_NAME: &str = "utf-8-replace-fallback";

/// 实际使用的编码描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingDescriptor {
    /// 无替换字符的解码
    Exact(&'static str),
    /// 替换字符最少的解码
    BestEffort {
        name: &'static str,
        markers: usize,
    },
    /// 所有候选均失败，使用有损 UTF-8
    Fallback,
}

impl EncodingDescriptor {
    /// 编码名称（不含注释）
    pub fn name(&self) -> &'static str {
        match self {
            EncodingDescriptor::Exact(name) => name,
            EncodingDescriptor::BestEffort { name, .. } => name,
            EncodingDescriptor::Fallback => FALLBACK_NAME,
        }
    }
}

impl fmt::Display for EncodingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingDescriptor::Exact(name) => write!(f, "{}", name),
            EncodingDescriptor::BestEffort { name, markers } => {
                write!(f, "{} (with {} replacement chars)", name, markers)
            }
            EncodingDescriptor::Fallback => write!(f, "{}", FALLBACK_NAME),
        }
    }
}

impl Serialize for EncodingDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 解码后的文本及其编码描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    pub text: String,
    pub encoding: EncodingDescriptor,
}

/// 编码识别器
#[derive(Debug, Clone)]
pub struct EncodingResolver {
    candidates: Vec<Candidate>,
}

impl Default for EncodingResolver {
    fn default() -> Self {
        Self::new(default_candidates())
    }
}

impl EncodingResolver {
    /// 使用自定义候选列表创建识别器
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// 识别编码并解码
    pub fn resolve(&self, bytes: &[u8]) -> ResolvedText {
        let attempts = self
            .candidates
            .iter()
            .map(|candidate| (candidate.name(), candidate.attempt(bytes)));

        select_best(attempts).unwrap_or_else(|| ResolvedText {
            text: String::from_utf8_lossy(bytes).into_owned(),
            encoding: EncodingDescriptor::Fallback,
        })
    }
}

/// 从解码尝试序列中选出最佳结果
///
/// 序列是惰性的：遇到零替换字符的结果即停止消费。
/// 所有尝试均失败时返回 `None`。
pub fn select_best<I>(attempts: I) -> Option<ResolvedText>
where
    I: IntoIterator<Item = (&'static str, Attempt)>,
{
    let mut best: Option<(&'static str, String, usize)> = None;

    for (name, attempt) in attempts {
        let Attempt::Decoded { text, markers } = attempt else {
            continue;
        };

        if markers == 0 {
            return Some(ResolvedText {
                text,
                encoding: EncodingDescriptor::Exact(name),
            });
        }

        let better = best.as_ref().map_or(true, |(_, _, fewest)| markers < *fewest);
        if better {
            best = Some((name, text, markers));
        }
    }

    best.map(|(name, text, markers)| ResolvedText {
        text,
        encoding: EncodingDescriptor::BestEffort { name, markers },
    })
}
