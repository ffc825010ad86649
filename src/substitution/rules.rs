//! # 替换规则集
//!
//! 有序的 旧文本 → 新文本 映射。键唯一，应用顺序为插入顺序；
//! 重复插入同一键时保留原位置、更新新文本。
//!
//! ## 依赖关系
//! - 被 `substitution/engine.rs` 和 `parsers/` 使用
//! - 使用 `serde` 按文档顺序反序列化 JSON 对象

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// 单条替换规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub old: String,
    pub new: String,
}

/// 有序规则集
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入规则；键已存在时原地更新
    pub fn insert(&mut self, old: impl Into<String>, new: impl Into<String>) {
        let old = old.into();
        let new = new.into();
        match self.rules.iter_mut().find(|rule| rule.old == old) {
            Some(rule) => rule.new = new,
            None => self.rules.push(SubstitutionRule { old, new }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubstitutionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<O, N> FromIterator<(O, N)> for RuleSet
where
    O: Into<String>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (O, N)>>(iter: T) -> Self {
        let mut rules = RuleSet::new();
        for (old, new) in iter {
            rules.insert(old, new);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a SubstitutionRule;
    type IntoIter = std::slice::Iter<'a, SubstitutionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping old text to new text")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<RuleSet, M::Error> {
                let mut rules = RuleSet::new();
                while let Some((old, new)) = map.next_entry::<String, String>()? {
                    rules.insert(old, new);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut rules = RuleSet::new();
        rules.insert("a", "1");
        rules.insert("b", "2");
        rules.insert("a", "3");
        let pairs: Vec<_> = rules.iter().map(|r| (r.old.as_str(), r.new.as_str())).collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let rules: RuleSet = serde_json::from_str(r#"{"zeta": "z", "alpha": "", "mid": "m"}"#)
            .unwrap();
        let keys: Vec<_> = rules.iter().map(|r| r.old.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deserialize_rejects_non_string_values() {
        assert!(serde_json::from_str::<RuleSet>(r#"{"a": 1}"#).is_err());
        assert!(serde_json::from_str::<RuleSet>(r#"["a", "b"]"#).is_err());
    }
}
