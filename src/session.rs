//! Commit composition session
//!
//! Runs the whole pipeline for one commit: build and merge the questions,
//! prompt, assemble the message, classify it, report, and hand it to the
//! caller's commit callback.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::assembler::build_commit_message;
use crate::collaborators::{CommitAnalyzer, CommitRecord, PackageLister, Prompter, Reporter};
use crate::config::Config;
use crate::domain::{Question, QuestionKind, QuestionList, ReleaseClassification};
use crate::error::Result;
use crate::questions::{autocomplete_questions, build_default_questions, merge_questions};
use crate::warnings::SessionWarning;

/// Result of a completed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The message passed to the commit callback
    pub message: String,

    pub classification: ReleaseClassification,
}

/// One commit composition.
///
/// Holds its configuration explicitly so independent sessions never share state.
pub struct CommitSession {
    config: Config,
    /// Caller-supplied overrides; these win over the config's `[[questions]]`
    overrides: Vec<Question>,
    package_lister: Option<Arc<dyn PackageLister>>,
}

impl CommitSession {
    /// Create a session; the config's `[[questions]]` act as overrides
    pub fn new(config: Config) -> Self {
        CommitSession {
            config,
            overrides: Vec::new(),
            package_lister: None,
        }
    }

    /// Add override questions, consulted before the config's and any added earlier
    pub fn with_overrides(mut self, overrides: Vec<Question>) -> Self {
        self.overrides.splice(0..0, overrides);
        self
    }

    pub fn with_package_lister(mut self, lister: Arc<dyn PackageLister>) -> Self {
        self.package_lister = Some(lister);
        self
    }

    /// The merged question list, before autocomplete adaptation.
    ///
    /// Listing failures are reported and leave the packages question without choices.
    pub fn questions(&self, reporter: &dyn Reporter) -> QuestionList {
        let listing = self
            .package_lister
            .as_ref()
            .and_then(|lister| match lister.list_packages() {
                Ok(listing) => {
                    debug!(
                        packages = listing.packages.len(),
                        changed = listing.changed.len(),
                        "listed packages"
                    );
                    Some(listing)
                }
                Err(e) => {
                    warn!(error = %e, "package listing failed");
                    reporter.warning(&SessionWarning::PackageListingFailed {
                        reason: e.to_string(),
                    });
                    None
                }
            });

        let defaults = build_default_questions(&self.config, listing.as_ref());
        let configured = merge_questions(&defaults, &self.config.questions);
        merge_questions(&configured, &self.overrides)
    }

    /// Run the session to completion.
    ///
    /// `commit` is called exactly once, and only after prompting and
    /// classification both succeeded. Collaborator errors are returned
    /// unchanged and leave `commit` uncalled.
    ///
    /// # Returns
    /// * `Ok(SessionOutcome)` - The committed message and its classification
    /// * `Err` - Prompting, classification or the commit callback failed
    pub async fn run<F>(
        &self,
        prompter: &dyn Prompter,
        analyzer: &dyn CommitAnalyzer,
        reporter: &dyn Reporter,
        commit: F,
    ) -> Result<SessionOutcome>
    where
        F: FnOnce(&str) -> anyhow::Result<()>,
    {
        let questions = autocomplete_questions(self.questions(reporter));
        let width = self.config.format.max_line_width;

        if self.config.behavior.show_width_notice {
            reporter.notice(&format!(
                "Line 1 will be cropped at {} characters. All other lines will be wrapped after {} characters.",
                width, width
            ));
        }

        prompter.register_prompt(QuestionKind::Autocomplete)?;
        debug!(questions = questions.len(), "prompting");
        let answers = prompter.prompt(&questions).await?;

        let commit_message = build_commit_message(&answers);
        if commit_message.is_header_cropped(&self.config.format) {
            reporter.warning(&SessionWarning::HeaderCropped {
                length: commit_message.full_header().chars().count(),
                max: width,
            });
        }
        let message = commit_message.render(&self.config.format);

        let release = analyzer.analyze(&[CommitRecord::pending(&message)]).await?;
        let classification = ReleaseClassification::from(release);
        debug!(?classification, "classified commit");

        reporter.classification(classification);
        reporter.message(&message);

        commit(&message)?;

        Ok(SessionOutcome {
            message,
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{
        Package, PackageListing, RecordingReporter, StaticAnalyzer, StaticPackageLister,
    };
    use crate::domain::ReleaseType;

    #[test]
    fn test_config_questions_are_overrides() {
        let mut config = Config::default();
        config.questions = vec![Question::input("scope", "Config scope:")];
        let session = CommitSession::new(config);

        let questions = session.questions(&RecordingReporter::new());
        assert_eq!(questions.get("scope").unwrap().message, "Config scope:");
        assert_eq!(questions.len(), 7);
    }

    #[test]
    fn test_programmatic_overrides_take_precedence() {
        let mut config = Config::default();
        config.questions = vec![Question::input("scope", "Config scope:")];
        let session = CommitSession::new(config)
            .with_overrides(vec![Question::input("scope", "Caller scope:")]);

        let questions = session.questions(&RecordingReporter::new());
        assert_eq!(questions.get("scope").unwrap().message, "Caller scope:");
    }

    #[test]
    fn test_config_and_caller_overrides_combine() {
        let mut config = Config::default();
        config.questions = vec![
            Question::input("scope", "Config scope:"),
            Question::input("body", "Config body:"),
        ];
        let session = CommitSession::new(config)
            .with_overrides(vec![Question::input("scope", "Caller scope:")]);

        let questions = session.questions(&RecordingReporter::new());
        assert_eq!(questions.get("scope").unwrap().message, "Caller scope:");
        assert_eq!(questions.get("body").unwrap().message, "Config body:");
        assert_eq!(questions.len(), 7);
    }

    #[test]
    fn test_listing_failure_is_a_warning() {
        let session = CommitSession::new(Config::default())
            .with_package_lister(Arc::new(StaticPackageLister::failing("not a monorepo")));
        let reporter = RecordingReporter::new();

        let questions = session.questions(&reporter);
        assert!(questions.get("packages").unwrap().choices.is_empty());
        assert_eq!(
            reporter.warnings(),
            vec![SessionWarning::PackageListingFailed {
                reason: "not a monorepo".to_string()
            }]
        );
    }

    #[test]
    fn test_listing_populates_packages() {
        let listing = PackageListing {
            packages: vec![Package::new("test-package", "packages/test-package")],
            changed: vec![],
        };
        let session = CommitSession::new(Config::default())
            .with_package_lister(Arc::new(StaticPackageLister::new(listing)));

        let questions = session.questions(&RecordingReporter::new());
        assert_eq!(questions.get("packages").unwrap().choices.len(), 1);
    }

    #[tokio::test]
    async fn test_width_notice_can_be_disabled() {
        let mut config = Config::default();
        config.behavior.show_width_notice = false;
        let session = CommitSession::new(config);
        let prompter = crate::collaborators::ScriptedPrompter::new([(
            "Select the type of change that you're committing:",
            "docs",
        )]);
        let reporter = RecordingReporter::new();

        let outcome = session
            .run(
                &prompter,
                &StaticAnalyzer::new(Some(ReleaseType::Patch)),
                &reporter,
                |_| Ok(()),
            )
            .await
            .unwrap();

        assert_eq!(outcome.classification, ReleaseClassification::Patch);
        assert!(!reporter
            .events()
            .iter()
            .any(|e| matches!(e, crate::collaborators::mock::ReportEvent::Notice(_))));
    }
}
