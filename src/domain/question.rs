use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::answers::Answer;
use crate::error::{ComposerError, Result};

/// How a question collects its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text
    #[default]
    Input,
    /// Single choice
    List,
    /// Multi-select
    Checkbox,
    /// Single choice with a searchable choice list
    Autocomplete,
}

/// A selectable value with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Choice {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::new(value, value)
    }
}

/// A single prompt in the commit composition sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique key; answers are stored under this name
    pub name: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// Values preselected for checkbox questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default: Vec<String>,
    /// Blank text and empty selections are rejected by the prompter
    #[serde(default)]
    pub required: bool,
}

impl Question {
    /// Create a free-text question
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Question {
            name: name.into(),
            message: message.into(),
            kind: QuestionKind::Input,
            choices: Vec::new(),
            default: Vec::new(),
            required: false,
        }
    }

    /// Create a single-choice question
    pub fn list(name: impl Into<String>, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Question {
            kind: QuestionKind::List,
            choices,
            ..Question::input(name, message)
        }
    }

    /// Create a multi-select question with preselected values
    pub fn checkbox(
        name: impl Into<String>,
        message: impl Into<String>,
        choices: Vec<Choice>,
        default: Vec<String>,
    ) -> Self {
        Question {
            kind: QuestionKind::Checkbox,
            choices,
            default,
            ..Question::input(name, message)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reject a missing or blank answer to a required question
    pub fn validate(&self, answer: Option<&Answer>) -> Result<()> {
        if self.required && answer.map_or(true, Answer::is_blank) {
            return Err(ComposerError::validation(&self.name, "an answer is required"));
        }
        Ok(())
    }
}

/// Ordered questions with unique names; order is prompt order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QuestionList(Vec<Question>);

impl QuestionList {
    /// Build a list, rejecting duplicate names
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.name.as_str()) {
                return Err(ComposerError::DuplicateQuestion(question.name.clone()));
            }
        }
        Ok(QuestionList(questions))
    }

    /// Callers must preserve name uniqueness.
    pub(crate) fn from_unique(questions: Vec<Question>) -> Self {
        QuestionList(questions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.0.iter().find(|question| question.name == name)
    }

    pub fn into_vec(self) -> Vec<Question> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QuestionList {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
