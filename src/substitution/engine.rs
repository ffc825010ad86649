//! # 替换引擎
//!
//! 按规则顺序对文本做字面子串替换。每条规则作用于前面规则替换后的文本，
//! 因此前面的替换可能为后面的规则制造或消除匹配（顺序替换，而非同时替换）。
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 和 `commands/convert.rs` 使用
//! - 使用 `substitution/rules.rs` 的规则集

use super::rules::{RuleSet, SubstitutionRule};
use crate::encoding::REPLACEMENT_CHAR;

use serde::Serialize;

/// 替换操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Replace,
    Delete,
}

/// 单条规则的替换记录（仅为实际匹配的规则生成）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionRecord {
    pub old: String,
    pub new: String,
    pub count: usize,
    pub operation: Operation,
}

/// 替换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub records: Vec<SubstitutionRecord>,
}

/// 依次应用规则集
pub fn apply(text: &str, rules: &RuleSet) -> Substitution {
    let initial = Substitution {
        text: text.to_string(),
        records: Vec::new(),
    };

    rules.iter().fold(initial, |mut state, rule| {
        if let Some(record) = apply_rule(&mut state.text, rule) {
            state.records.push(record);
        }
        state
    })
}

/// 对当前文本应用单条规则，无匹配时返回 `None`
fn apply_rule(text: &mut String, rule: &SubstitutionRule) -> Option<SubstitutionRecord> {
    // 含替换字符的旧文本不可能对应真实内容
    if rule.old.contains(REPLACEMENT_CHAR) {
        return None;
    }

    let count = text.matches(rule.old.as_str()).count();
    if count == 0 {
        return None;
    }

    *text = text.replace(rule.old.as_str(), &rule.new);

    let operation = if rule.new.is_empty() {
        Operation::Delete
    } else {
        Operation::Replace
    };

    Some(SubstitutionRecord {
        old: rule.old.clone(),
        new: rule.new.clone(),
        count,
        operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, &str)]) -> RuleSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_replace_and_delete_in_order() {
        let result = apply(
            "Hello, World! Hello, Earth!",
            &rules(&[("Hello", "Hi"), ("World", "")]),
        );
        assert_eq!(result.text, "Hi, ! Hi, Earth!");
        assert_eq!(
            result.records,
            vec![
                SubstitutionRecord {
                    old: "Hello".to_string(),
                    new: "Hi".to_string(),
                    count: 2,
                    operation: Operation::Replace,
                },
                SubstitutionRecord {
                    old: "World".to_string(),
                    new: String::new(),
                    count: 1,
                    operation: Operation::Delete,
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_rule_produces_no_record() {
        let result = apply("nothing here", &rules(&[("absent", "present")]));
        assert_eq!(result.text, "nothing here");
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        // "cat" -> "dog" 之后 "dog" 的计数包含新产生的匹配
        let result = apply("cat dog", &rules(&[("cat", "dog"), ("dog", "bird")]));
        assert_eq!(result.text, "bird bird");
        assert_eq!(result.records[1].count, 2);
    }

    #[test]
    fn test_earlier_rules_can_destroy_matches() {
        let result = apply("foobar", &rules(&[("foo", "x"), ("foobar", "y")]));
        assert_eq!(result.text, "xbar");
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_marker_rule_is_skipped_even_when_text_contains_marker() {
        let text = "broken \u{FFFD} text";
        let result = apply(text, &rules(&[("\u{FFFD}", "?"), ("text", "line")]));
        assert_eq!(result.text, "broken \u{FFFD} line");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].old, "text");
    }

    #[test]
    fn test_empty_old_text_matches_between_every_char() {
        let result = apply("ab", &rules(&[("", "-")]));
        assert_eq!(result.text, "-a-b-");
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].count, 3);
        assert_eq!(result.records[0].operation, Operation::Replace);
    }

    #[test]
    fn test_counts_non_overlapping_occurrences() {
        let result = apply("aaaa", &rules(&[("aa", "b")]));
        assert_eq!(result.text, "bb");
        assert_eq!(result.records[0].count, 2);
    }

    #[test]
    fn test_literal_matching_only() {
        let result = apply("a.c abc A.C", &rules(&[("a.c", "X")]));
        assert_eq!(result.text, "X abc A.C");
    }

    #[test]
    fn test_idempotent_without_cross_rule_interference() {
        let set = rules(&[("colour", "color"), ("grey", "gray")]);
        let once = apply("grey colour", &set);
        let twice = apply(&once.text, &set);
        assert_eq!(once.text, twice.text);
        assert!(twice.records.is_empty());
    }

    #[test]
    fn test_reapplication_differs_with_cross_rule_interference() {
        // 第二条规则的新文本为第一条规则制造了匹配
        let set = rules(&[("a", "b"), ("c", "a")]);
        let once = apply("ac", &set);
        assert_eq!(once.text, "ba");
        assert_eq!(apply(&once.text, &set).text, "bb");
    }

    #[test]
    fn test_operation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Operation::Delete).unwrap(), "\"delete\"");
        assert_eq!(serde_json::to_string(&Operation::Replace).unwrap(), "\"replace\"");
    }
}
