use thiserror::Error;

/// Unified error type for commit composition
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate question name: {0}")]
    DuplicateQuestion(String),

    #[error("Invalid answer for '{question}': {reason}")]
    Validation { question: String, reason: String },

    /// Rejection from the prompter, analyzer or commit callback, passed through as-is.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

/// Convenience type alias for Results in cz-lerna-changelog
pub type Result<T> = std::result::Result<T, ComposerError>;

impl ComposerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ComposerError::Config(msg.into())
    }

    /// Create a validation error for the named question
    pub fn validation(question: impl Into<String>, reason: impl Into<String>) -> Self {
        ComposerError::Validation {
            question: question.into(),
            reason: reason.into(),
        }
    }
}
