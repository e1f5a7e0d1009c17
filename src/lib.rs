//! cz-lerna-changelog - conventional commit composer for multi-package repositories.
//!
//! Asks for the type, scope, description, breaking changes, closed issues and
//! affected packages of a change, then assembles a conventional commit message
//! such as:
//!
//! ```text
//! feat(parser): accept trailing commas
//!
//! affects: core, cli
//!
//! Longer description, wrapped at 100 characters.
//! ```
//!
//! Prompting, package discovery, release analysis and committing belong to the
//! host tool and are plugged in through the traits in [collaborators].

pub mod assembler;
pub mod collaborators;
pub mod config;
pub mod domain;
pub mod error;
pub mod questions;
pub mod session;
pub mod warnings;

pub use assembler::assemble_message;
pub use config::{load_config, Config};
pub use domain::{
    Answer, AnswerMap, CommitMessage, Question, QuestionKind, QuestionList, ReleaseClassification,
    ReleaseType,
};
pub use error::{ComposerError, Result};
pub use questions::{build_default_questions, merge_questions};
pub use session::{CommitSession, SessionOutcome};
pub use warnings::SessionWarning;
