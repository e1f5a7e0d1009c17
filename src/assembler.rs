//! Turns prompt answers into a commit message.

use crate::config::FormatConfig;
use crate::domain::{names, AnswerMap, BodySegment, CommitMessage};

/// Build the structured message from the answers.
///
/// Body order is affects line, long description, breaking changes, issues
/// closed. Presence of the type and subject is not checked here.
pub fn build_commit_message(answers: &AnswerMap) -> CommitMessage {
    CommitMessage {
        commit_type: answers.text(names::TYPE).to_string(),
        scope: answers.text(names::SCOPE).to_string(),
        subject: answers.text(names::SUBJECT).to_string(),
        body: vec![
            BodySegment::Affects(answers.list(names::PACKAGES).to_vec()),
            BodySegment::Description(answers.text(names::BODY).to_string()),
            BodySegment::Breaking(answers.text(names::BREAKING).to_string()),
            BodySegment::IssuesClosed(answers.text(names::FOOTER).to_string()),
        ],
    }
}

/// Assemble the final commit message text
pub fn assemble_message(answers: &AnswerMap, format: &FormatConfig) -> String {
    build_commit_message(answers).render(format)
}
