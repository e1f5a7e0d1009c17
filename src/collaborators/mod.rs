//! Collaborator abstraction layer
//!
//! The composer never renders prompts, detects changed packages, classifies
//! commits or prints on its own. Each of those concerns sits behind a trait so
//! a host tool can plug in its own implementation:
//!
//! - [Prompter]: asks the questions and returns the answers
//! - [PackageLister]: lists candidate packages for the `packages` question
//! - [CommitAnalyzer]: decides the release tier implied by a message
//! - [Reporter]: shows notices, warnings and the final result
//!
//! [terminal::ConsoleReporter] is a terminal [Reporter]; [mock] holds scripted
//! test doubles for every trait.

pub mod mock;
pub mod terminal;

pub use mock::{RecordingReporter, ScriptedPrompter, StaticAnalyzer, StaticPackageLister};
pub use terminal::ConsoleReporter;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{AnswerMap, QuestionKind, QuestionList, ReleaseClassification, ReleaseType};
use crate::warnings::SessionWarning;

/// Commit handed to the analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Empty for a commit that does not exist yet
    pub hash: String,
    pub message: String,
}

impl CommitRecord {
    /// A not-yet-created commit with the given message
    pub fn pending(message: impl Into<String>) -> Self {
        CommitRecord {
            hash: String::new(),
            message: message.into(),
        }
    }
}

/// A package of a multi-package repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub location: PathBuf,
}

impl Package {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Package {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Packages known to the repository and the names of those with changes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageListing {
    pub packages: Vec<Package>,
    pub changed: Vec<String>,
}

/// Asks questions on behalf of the session.
///
/// Implementations prompt strictly in list order and resolve once with every answer.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Make a custom input kind available before prompting
    fn register_prompt(&self, _kind: QuestionKind) -> anyhow::Result<()> {
        Ok(())
    }

    async fn prompt(&self, questions: &QuestionList) -> anyhow::Result<AnswerMap>;
}

/// Lists the packages offered by the `packages` question
pub trait PackageLister: Send + Sync {
    fn list_packages(&self) -> anyhow::Result<PackageListing>;
}

/// Determines the release implied by a commit history.
///
/// `Ok(None)` means no release.
#[async_trait]
pub trait CommitAnalyzer: Send + Sync {
    async fn analyze(&self, commits: &[CommitRecord]) -> anyhow::Result<Option<ReleaseType>>;
}

/// Display side of a session
pub trait Reporter: Send + Sync {
    fn notice(&self, text: &str);

    fn warning(&self, warning: &SessionWarning);

    fn classification(&self, classification: ReleaseClassification);

    fn message(&self, message: &str);
}
