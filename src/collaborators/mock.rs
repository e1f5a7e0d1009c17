//! Scripted collaborators for tests and dry runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::collaborators::{
    CommitAnalyzer, CommitRecord, PackageLister, PackageListing, Prompter, Reporter,
};
use crate::domain::{
    Answer, AnswerMap, QuestionKind, QuestionList, ReleaseClassification, ReleaseType,
};
use crate::warnings::SessionWarning;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Prompter answering from a script keyed by question message.
///
/// Keying by message rather than name means a replaced question is only
/// answered when the script knows its new wording.
pub struct ScriptedPrompter {
    answers: HashMap<String, Answer>,
    failure: Option<String>,
    validate: bool,
    asked: Mutex<Vec<String>>,
    registered: Mutex<Vec<QuestionKind>>,
}

impl ScriptedPrompter {
    /// Create a prompter from `(message, answer)` pairs
    pub fn new<K, V>(script: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Answer>,
    {
        ScriptedPrompter {
            answers: script
                .into_iter()
                .map(|(message, answer)| (message.into(), answer.into()))
                .collect(),
            failure: None,
            validate: false,
            asked: Mutex::new(Vec::new()),
            registered: Mutex::new(Vec::new()),
        }
    }

    /// A prompter whose `prompt` always rejects with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        ScriptedPrompter {
            failure: Some(reason.into()),
            ..ScriptedPrompter::new(Vec::<(String, Answer)>::new())
        }
    }

    /// Apply each question's validation rule to its scripted answer
    pub fn validating(mut self) -> Self {
        self.validate = true;
        self
    }

    /// Names of the questions asked, in prompt order
    pub fn asked(&self) -> Vec<String> {
        lock(&self.asked).clone()
    }

    pub fn registered_kinds(&self) -> Vec<QuestionKind> {
        lock(&self.registered).clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    fn register_prompt(&self, kind: QuestionKind) -> anyhow::Result<()> {
        lock(&self.registered).push(kind);
        Ok(())
    }

    async fn prompt(&self, questions: &QuestionList) -> anyhow::Result<AnswerMap> {
        if let Some(reason) = &self.failure {
            return Err(anyhow::anyhow!("{}", reason));
        }

        let mut collected = Vec::with_capacity(questions.len());
        for question in questions {
            lock(&self.asked).push(question.name.clone());

            let answer = self.answers.get(&question.message);
            if self.validate {
                question.validate(answer)?;
            }
            if let Some(answer) = answer {
                collected.push((question.name.clone(), answer.clone()));
            }
        }

        Ok(collected.into_iter().collect())
    }
}

/// Package lister returning a fixed listing or a fixed failure
pub struct StaticPackageLister {
    result: std::result::Result<PackageListing, String>,
}

impl StaticPackageLister {
    pub fn new(listing: PackageListing) -> Self {
        StaticPackageLister {
            result: Ok(listing),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        StaticPackageLister {
            result: Err(reason.into()),
        }
    }
}

impl PackageLister for StaticPackageLister {
    fn list_packages(&self) -> anyhow::Result<PackageListing> {
        match &self.result {
            Ok(listing) => Ok(listing.clone()),
            Err(reason) => Err(anyhow::anyhow!("{}", reason)),
        }
    }
}

/// Analyzer returning a fixed release decision and remembering what it saw
pub struct StaticAnalyzer {
    result: std::result::Result<Option<ReleaseType>, String>,
    seen: Mutex<Vec<CommitRecord>>,
}

impl StaticAnalyzer {
    pub fn new(release: Option<ReleaseType>) -> Self {
        StaticAnalyzer {
            result: Ok(release),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        StaticAnalyzer {
            result: Err(reason.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every commit passed to `analyze`, across calls
    pub fn seen(&self) -> Vec<CommitRecord> {
        lock(&self.seen).clone()
    }
}

#[async_trait]
impl CommitAnalyzer for StaticAnalyzer {
    async fn analyze(&self, commits: &[CommitRecord]) -> anyhow::Result<Option<ReleaseType>> {
        lock(&self.seen).extend_from_slice(commits);
        match &self.result {
            Ok(release) => Ok(*release),
            Err(reason) => Err(anyhow::anyhow!("{}", reason)),
        }
    }
}

/// Something a [RecordingReporter] was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Notice(String),
    Warning(SessionWarning),
    Classification(ReleaseClassification),
    Message(String),
}

/// Reporter that keeps every event in order
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        lock(&self.events).clone()
    }

    pub fn warnings(&self) -> Vec<SessionWarning> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Warning(warning) => Some(warning),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn notice(&self, text: &str) {
        lock(&self.events).push(ReportEvent::Notice(text.to_string()));
    }

    fn warning(&self, warning: &SessionWarning) {
        lock(&self.events).push(ReportEvent::Warning(warning.clone()));
    }

    fn classification(&self, classification: ReleaseClassification) {
        lock(&self.events).push(ReportEvent::Classification(classification));
    }

    fn message(&self, message: &str) {
        lock(&self.events).push(ReportEvent::Message(message.to_string()));
    }
}
