//! # 预设文件解析
//!
//! 读取导出的预设文件并把选中的配置方案转换为规则集。
//!
//! ## 文件格式
//! ```json
//! {
//!   "version": "2.0",
//!   "exportDate": "2024-01-01T00:00:00.000Z",
//!   "currentProfile": "default",
//!   "profiles": {
//!     "default": [
//!       { "type": "replace", "old": "colour", "new": "color" },
//!       { "type": "delete", "word": "um" }
//!     ]
//!   }
//! }
//! ```
//!
//! 旧格式的规则没有 `type` 字段：`{ "old", "new" }` 为替换，
//! `{ "ruleType": "delete", "old" }` 或 `new` 为空字符串时为删除。
//!
//! ## 转换规则
//! - 先加入全部替换规则，再加入全部删除规则
//! - 两端去除首尾空白
//! - 替换规则要求新旧文本都非空且不相同
//! - 含替换字符（U+FFFD）的规则被丢弃
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `serde_json`

use crate::encoding::REPLACEMENT_CHAR;
use crate::error::{Result, TextSwapError};
use crate::substitution::RuleSet;

use clap::ValueEnum;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 未指定 currentProfile 时优先使用的方案名
const DEFAULT_PROFILE: &str = "default";

/// 规则类型筛选
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RuleMode {
    /// Only replace rules
    Replace,
    /// Only delete rules
    Delete,
    /// Replace rules followed by delete rules
    #[default]
    All,
}

/// 预设中的一条规则（兼容新旧格式）
#[derive(Debug, Clone, Deserialize)]
struct RawRule {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "ruleType")]
    rule_type: Option<String>,
    old: Option<String>,
    new: Option<String>,
    word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PresetRule {
    Replace { old: String, new: String },
    Delete { word: String },
}

impl RawRule {
    fn normalize(self) -> Option<PresetRule> {
        let is_delete = match self.kind.as_deref() {
            Some("delete") => true,
            Some("replace") => false,
            Some(_) => return None,
            None => {
                self.rule_type.as_deref() == Some("delete") || self.new.as_deref() == Some("")
            }
        };

        if is_delete {
            let word = self.word.or(self.old)?;
            Some(PresetRule::Delete { word })
        } else {
            Some(PresetRule::Replace {
                old: self.old.unwrap_or_default(),
                new: self.new.unwrap_or_default(),
            })
        }
    }
}

/// 预设文件
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub current_profile: Option<String>,
    profiles: BTreeMap<String, Vec<RawRule>>,
}

impl PresetFile {
    /// 所有配置方案名称
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// 选择配置方案：显式指定 > currentProfile > `default` > 唯一的方案
    fn select<'a>(
        &'a self,
        requested: Option<&str>,
        path: &Path,
    ) -> Result<(&'a str, &'a [RawRule])> {
        let name = match requested.or(self.current_profile.as_deref()) {
            Some(name) => name,
            None if self.profiles.contains_key(DEFAULT_PROFILE) => DEFAULT_PROFILE,
            None => match self.profiles.keys().next() {
                Some(only) if self.profiles.len() == 1 => only.as_str(),
                _ => {
                    return Err(TextSwapError::AmbiguousProfile {
                        path: path.display().to_string(),
                        available: self.profile_names().collect::<Vec<_>>().join(", "),
                    })
                }
            },
        };

        self.profiles
            .get_key_value(name)
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
            .ok_or_else(|| TextSwapError::ProfileNotFound {
                name: name.to_string(),
                path: path.display().to_string(),
            })
    }

    /// 将选中的配置方案转换为规则集，返回方案名和规则集
    pub fn rules(
        &self,
        requested: Option<&str>,
        mode: RuleMode,
        path: &Path,
    ) -> Result<(String, RuleSet)> {
        let (name, raw) = self.select(requested, path)?;
        let rules: Vec<PresetRule> = raw.iter().cloned().filter_map(RawRule::normalize).collect();
        Ok((name.to_string(), to_rule_set(&rules, mode)))
    }
}

fn to_rule_set(rules: &[PresetRule], mode: RuleMode) -> RuleSet {
    let mut set = RuleSet::new();

    if mode != RuleMode::Delete {
        for rule in rules {
            if let PresetRule::Replace { old, new } = rule {
                let (old, new) = (old.trim(), new.trim());
                if old.is_empty() || new.is_empty() || old == new {
                    continue;
                }
                if old.contains(REPLACEMENT_CHAR) || new.contains(REPLACEMENT_CHAR) {
                    continue;
                }
                set.insert(old, new);
            }
        }
    }

    if mode != RuleMode::Replace {
        for rule in rules {
            if let PresetRule::Delete { word } = rule {
                let word = word.trim();
                if word.is_empty() || word.contains(REPLACEMENT_CHAR) {
                    continue;
                }
                set.insert(word, "");
            }
        }
    }

    set
}

/// 读取预设文件
pub fn load_preset(path: &Path) -> Result<PresetFile> {
    let content = fs::read_to_string(path).map_err(|e| TextSwapError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_preset(&content)
}

/// 解析预设文件内容
pub fn parse_preset(content: &str) -> Result<PresetFile> {
    serde_json::from_str(content).map_err(|e| TextSwapError::JsonError {
        what: "preset file".to_string(),
        source: e,
    })
}
