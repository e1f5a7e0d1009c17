use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::Question;
use crate::error::{ComposerError, Result};

/// Represents the complete configuration for a commit composition session.
///
/// Contains the offered commit types, message formatting rules, behavior options and
/// override questions that replace default questions by name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_commit_types")]
    pub types: Vec<CommitTypeConfig>,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Replacement questions, matched against the defaults by `name`
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A commit type offered by the `type` question
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CommitTypeConfig {
    pub value: String,
    pub description: String,
}

impl CommitTypeConfig {
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        CommitTypeConfig {
            value: value.into(),
            description: description.into(),
        }
    }

    /// Choice label, e.g. `feat:     A new feature`
    pub fn label(&self) -> String {
        format!("{:<10}{}", format!("{}:", self.value), self.description)
    }
}

/// Returns the default list of conventional commit types.
fn default_commit_types() -> Vec<CommitTypeConfig> {
    vec![
        CommitTypeConfig::new("feat", "A new feature"),
        CommitTypeConfig::new("fix", "A bug fix"),
        CommitTypeConfig::new("docs", "Documentation only changes"),
        CommitTypeConfig::new(
            "style",
            "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
        ),
        CommitTypeConfig::new(
            "refactor",
            "A code change that neither fixes a bug nor adds a feature",
        ),
        CommitTypeConfig::new("perf", "A code change that improves performance"),
        CommitTypeConfig::new("test", "Adding missing tests"),
        CommitTypeConfig::new(
            "chore",
            "Changes to the build process or auxiliary tools and libraries such as documentation generation",
        ),
        CommitTypeConfig::new("revert", "Revert to a commit"),
        CommitTypeConfig::new("WIP", "Work in progress"),
    ]
}

fn default_max_line_width() -> usize {
    100
}

fn default_breakline_char() -> String {
    "|".to_string()
}

fn default_breaking_prefix() -> String {
    "BREAKING CHANGE:".to_string()
}

fn default_footer_prefix() -> String {
    "ISSUES CLOSED:".to_string()
}

/// Formatting rules for the assembled commit message.
///
/// The header is cropped at `max_line_width`; description, breaking and footer text is
/// wrapped at it. The affects line is never wrapped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,

    /// Marker users type to force a line break
    #[serde(default = "default_breakline_char")]
    pub breakline_char: String,

    #[serde(default = "default_breaking_prefix")]
    pub breaking_prefix: String,

    #[serde(default = "default_footer_prefix")]
    pub footer_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            max_line_width: default_max_line_width(),
            breakline_char: default_breakline_char(),
            breaking_prefix: default_breaking_prefix(),
            footer_prefix: default_footer_prefix(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls what the session reports without affecting the composed message.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Print the line-width notice before prompting
    #[serde(default = "default_true")]
    pub show_width_notice: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            show_width_notice: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            types: default_commit_types(),
            format: FormatConfig::default(),
            behavior: BehaviorConfig::default(),
            questions: Vec::new(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make composition meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.format.max_line_width == 0 {
            return Err(ComposerError::config("format.max_line_width must be positive"));
        }
        if self.format.breakline_char.is_empty() {
            return Err(ComposerError::config("format.breakline_char must not be empty"));
        }
        if self.types.is_empty() {
            return Err(ComposerError::config("at least one commit type is required"));
        }
        if let Some(blank) = self.types.iter().find(|t| t.value.trim().is_empty()) {
            return Err(ComposerError::config(format!(
                "commit type with description '{}' has an empty value",
                blank.description
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `czlerna.toml` in current directory
/// 3. `.czlerna.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading configuration");
        fs::read_to_string(path)?
    } else if Path::new("./czlerna.toml").exists() {
        debug!("loading configuration from ./czlerna.toml");
        fs::read_to_string("./czlerna.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".czlerna.toml");
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration");
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionKind;

    #[test]
    fn test_type_label_alignment() {
        let types = default_commit_types();
        assert_eq!(types[0].label(), "feat:     A new feature");
        assert_eq!(
            types[4].label(),
            "refactor: A code change that neither fixes a bug nor adds a feature"
        );
    }

    #[test]
    fn test_partial_format_section_keeps_defaults() {
        let config = Config::from_toml("[format]\nmax_line_width = 72\n").unwrap();
        assert_eq!(config.format.max_line_width, 72);
        assert_eq!(config.format.breakline_char, "|");
        assert_eq!(config.types.len(), 10);
        assert!(config.behavior.show_width_notice);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Config::from_toml("[format]\nmax_line_width = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_line_width"));
    }

    #[test]
    fn test_empty_breakline_rejected() {
        assert!(Config::from_toml("[format]\nbreakline_char = \"\"\n").is_err());
    }

    #[test]
    fn test_empty_types_rejected() {
        assert!(Config::from_toml("types = []\n").is_err());
    }

    #[test]
    fn test_override_questions_parsed() {
        let config = Config::from_toml(
            r#"
[[questions]]
name = "scope"
type = "list"
message = "Pick a scope:"
choices = [{ name = "Core", value = "core" }]
"#,
        )
        .unwrap();
        assert_eq!(config.questions.len(), 1);
        assert_eq!(config.questions[0].kind, QuestionKind::List);
        assert_eq!(config.questions[0].choices[0].value, "core");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.questions.is_empty());
    }

    #[test]
    fn test_required_override_parsed() {
        let config = Config::from_toml(
            r#"
[[questions]]
name = "footer"
message = "Issues:"
required = true
"#,
        )
        .unwrap();
        assert!(config.questions[0].required);
    }
}
