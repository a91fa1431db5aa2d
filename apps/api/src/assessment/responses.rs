use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recorded answer: a 1-based rank for scaled questions, the option literal for choice ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rank(i64),
    Choice(String),
}

impl From<&str> for AnswerValue {
    fn from(literal: &str) -> Self {
        AnswerValue::Choice(literal.to_string())
    }
}

/// Question id → answer. Holds at most one entry per id; re-recording overwrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous answer, if the question had one.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(question_id.into(), value)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(id, v)| (id.as_str(), v))
    }

    /// Rank recorded for a scaled question; `None` when missing or not a rank.
    pub fn rank(&self, question_id: &str) -> Option<i64> {
        match self.answers.get(question_id) {
            Some(AnswerValue::Rank(r)) => Some(*r),
            _ => None,
        }
    }

    /// Literal recorded for a choice question; `None` when missing or not a literal.
    pub fn choice(&self, question_id: &str) -> Option<&str> {
        match self.answers.get(question_id) {
            Some(AnswerValue::Choice(c)) => Some(c.as_str()),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for (id, value) in iter {
            set.insert(id, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites_instead_of_duplicating() {
        let mut set = ResponseSet::new();
        assert_eq!(set.insert("psych_1", AnswerValue::Rank(2)), None);
        assert_eq!(
            set.insert("psych_1", AnswerValue::Rank(4)),
            Some(AnswerValue::Rank(2))
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.rank("psych_1"), Some(4));
    }

    #[test]
    fn test_typed_accessors_ignore_other_kind() {
        let set: ResponseSet = [
            ("psych_1", AnswerValue::Rank(3)),
            ("tech_1", AnswerValue::from("anything")),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.choice("psych_1"), None);
        assert_eq!(set.rank("tech_1"), None);
        assert_eq!(set.choice("tech_1"), Some("anything"));
        assert_eq!(set.rank("missing"), None);
    }

    #[test]
    fn test_json_shape_is_a_flat_map() {
        let set: ResponseSet = serde_json::from_value(json!({
            "will_1": 5,
            "realworld_1": "Independent work with minimal collaboration"
        }))
        .unwrap();

        assert_eq!(set.rank("will_1"), Some(5));
        assert_eq!(
            set.choice("realworld_1"),
            Some("Independent work with minimal collaboration")
        );
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({
                "realworld_1": "Independent work with minimal collaboration",
                "will_1": 5
            })
        );
    }

    #[test]
    fn test_any_integer_parses_as_a_rank() {
        // range checks belong to the catalog, not the wire format
        let set: ResponseSet =
            serde_json::from_value(json!({ "will_1": -1, "skill_1": 300 })).unwrap();
        assert_eq!(set.rank("will_1"), Some(-1));
        assert_eq!(set.rank("skill_1"), Some(300));
    }

    #[test]
    fn test_fractional_rank_is_not_an_answer() {
        let parsed: Result<ResponseSet, _> = serde_json::from_value(json!({ "will_1": 2.5 }));
        assert!(parsed.is_err());
    }
}
