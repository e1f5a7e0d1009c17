use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer to a single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    /// Multi-select answers, in selection order
    List(Vec<String>),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Answer::Text(_) => None,
            Answer::List(items) => Some(items),
        }
    }

    /// Whitespace-only text or an empty list
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Text(text) => text.trim().is_empty(),
            Answer::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::List(values)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Answer::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Answers for one session, keyed by question name.
///
/// Built once by the prompter via `collect()` and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, Answer>);

impl AnswerMap {
    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    /// Text answer for `name`, empty when missing or not text
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(Answer::as_text).unwrap_or("")
    }

    /// List answer for `name`, empty when missing or not a list
    pub fn list(&self, name: &str) -> &[String] {
        self.get(name).and_then(Answer::as_list).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerMap
where
    K: Into<String>,
    V: Into<Answer>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AnswerMap(
            iter.into_iter()
                .map(|(name, answer)| (name.into(), answer.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_list_accessors() {
        let answers: AnswerMap = [
            ("scope", Answer::from("core")),
            ("packages", Answer::from(vec!["a", "b"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(answers.text("scope"), "core");
        assert_eq!(answers.list("packages"), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_missing_and_mismatched_answers_read_empty() {
        let answers: AnswerMap = [("scope", Answer::from(vec!["x"]))].into_iter().collect();
        assert_eq!(answers.text("scope"), "");
        assert_eq!(answers.text("subject"), "");
        assert!(answers.list("packages").is_empty());
    }

    #[test]
    fn test_is_blank() {
        assert!(Answer::from(" \t").is_blank());
        assert!(Answer::List(vec![]).is_blank());
        assert!(!Answer::from(vec!["pkg"]).is_blank());
    }

    #[test]
    fn test_answers_deserialize_untagged() {
        let answers: AnswerMap = toml::from_str(
            r#"
type = "feat"
packages = ["test-package"]
"#,
        )
        .unwrap();
        assert_eq!(answers.text("type"), "feat");
        assert_eq!(answers.list("packages"), ["test-package".to_string()]);
        assert_eq!(answers.len(), 2);
    }
}
