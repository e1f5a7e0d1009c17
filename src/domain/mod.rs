//! Domain logic - pure types and rules independent of prompting and display

pub mod answers;
pub mod commit;
pub mod question;
pub mod release;
pub mod wrap;

pub use answers::{Answer, AnswerMap};
pub use commit::{BodySegment, CommitMessage};
pub use question::{Choice, Question, QuestionKind, QuestionList};
pub use release::{ReleaseClassification, ReleaseType};

/// Names of the default questions, which are also the answer keys
pub mod names {
    pub const TYPE: &str = "type";
    pub const SCOPE: &str = "scope";
    pub const SUBJECT: &str = "subject";
    pub const BODY: &str = "body";
    pub const BREAKING: &str = "breaking";
    pub const FOOTER: &str = "footer";
    pub const PACKAGES: &str = "packages";
}
