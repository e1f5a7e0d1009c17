use crate::config::FormatConfig;
use crate::domain::wrap::{apply_breaklines, crop, wrap};

/// One section of the commit body, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySegment {
    /// Affected packages, rendered on one unwrapped line
    Affects(Vec<String>),
    Description(String),
    Breaking(String),
    IssuesClosed(String),
}

impl BodySegment {
    /// Render the segment, or `None` when it has no content
    pub fn render(&self, format: &FormatConfig) -> Option<String> {
        match self {
            BodySegment::Affects(packages) => affects_line(packages),
            BodySegment::Description(text) => wrapped(text, format),
            BodySegment::Breaking(text) => wrapped(text, format)
                .map(|text| format!("{}\n{}", format.breaking_prefix, text)),
            BodySegment::IssuesClosed(text) => wrapped(text, format)
                .map(|text| format!("{} {}", format.footer_prefix, text)),
        }
    }
}

/// `affects: a, b` for a non-empty package selection, never wrapped
fn affects_line(packages: &[String]) -> Option<String> {
    (!packages.is_empty()).then(|| format!("affects: {}", packages.join(", ")))
}

fn wrapped(text: &str, format: &FormatConfig) -> Option<String> {
    let text = wrap(
        &apply_breaklines(text, &format.breakline_char),
        format.max_line_width,
    );
    (!text.is_empty()).then_some(text)
}

/// Structured conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub commit_type: String,
    pub scope: String,
    pub subject: String,
    pub body: Vec<BodySegment>,
}

impl CommitMessage {
    /// Header before cropping: `type(scope): subject`, or `type: subject` without scope
    pub fn full_header(&self) -> String {
        let commit_type = self.commit_type.trim();
        let scope = self.scope.trim();
        let subject = self.subject.trim();

        if scope.is_empty() {
            format!("{}: {}", commit_type, subject)
        } else {
            format!("{}({}): {}", commit_type, scope, subject)
        }
    }

    /// Header cropped to the maximum line width
    pub fn header(&self, format: &FormatConfig) -> String {
        crop(&self.full_header(), format.max_line_width)
    }

    pub fn is_header_cropped(&self, format: &FormatConfig) -> bool {
        self.full_header().chars().count() > format.max_line_width
    }

    /// Render header and non-empty body segments, separated by blank lines
    pub fn render(&self, format: &FormatConfig) -> String {
        let mut parts = vec![self.header(format)];
        parts.extend(self.body.iter().filter_map(|segment| segment.render(format)));
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(scope: &str, body: Vec<BodySegment>) -> CommitMessage {
        CommitMessage {
            commit_type: "fix".to_string(),
            scope: scope.to_string(),
            subject: "handle empty input".to_string(),
            body,
        }
    }

    #[test]
    fn test_header_with_scope() {
        let format = FormatConfig::default();
        assert_eq!(
            message("parser", vec![]).render(&format),
            "fix(parser): handle empty input"
        );
    }

    #[test]
    fn test_header_without_scope() {
        let format = FormatConfig::default();
        assert_eq!(message("  ", vec![]).header(&format), "fix: handle empty input");
    }

    #[test]
    fn test_header_cropped_at_width() {
        let format = FormatConfig::default();
        let mut msg = message("core", vec![]);
        msg.subject = "s".repeat(120);
        assert!(msg.is_header_cropped(&format));
        assert_eq!(msg.header(&format).chars().count(), 100);
        assert!(msg.header(&format).starts_with("fix(core): sss"));
    }

    #[test]
    fn test_breaking_section() {
        let format = FormatConfig::default();
        let msg = message(
            "",
            vec![BodySegment::Breaking("config keys renamed|see docs".to_string())],
        );
        assert_eq!(
            msg.render(&format),
            "fix: handle empty input\n\nBREAKING CHANGE:\nconfig keys renamed\nsee docs"
        );
    }

    #[test]
    fn test_issues_closed_section() {
        let format = FormatConfig::default();
        let msg = message("", vec![BodySegment::IssuesClosed("#31, #34".to_string())]);
        assert_eq!(
            msg.render(&format),
            "fix: handle empty input\n\nISSUES CLOSED: #31, #34"
        );
    }

    #[test]
    fn test_custom_footer_prefix() {
        let format = FormatConfig {
            footer_prefix: "Closes".to_string(),
            ..FormatConfig::default()
        };
        let msg = message("", vec![BodySegment::IssuesClosed("#31".to_string())]);
        assert_eq!(msg.render(&format), "fix: handle empty input\n\nCloses #31");
    }

    #[test]
    fn test_blank_segments_leave_no_gaps() {
        let format = FormatConfig::default();
        let msg = message(
            "api",
            vec![
                BodySegment::Affects(vec![]),
                BodySegment::Description("   ".to_string()),
                BodySegment::Breaking(String::new()),
                BodySegment::IssuesClosed("#7".to_string()),
            ],
        );
        assert_eq!(
            msg.render(&format),
            "fix(api): handle empty input\n\nISSUES CLOSED: #7"
        );
    }

    #[test]
    fn test_affects_line_never_wrapped() {
        let format = FormatConfig {
            max_line_width: 20,
            ..FormatConfig::default()
        };
        let packages = vec!["package-one".to_string(), "package-two".to_string()];
        let rendered = BodySegment::Affects(packages).render(&format).unwrap();
        assert_eq!(rendered, "affects: package-one, package-two");
    }

    #[test]
    fn test_description_wrapped_at_width() {
        let format = FormatConfig {
            max_line_width: 10,
            ..FormatConfig::default()
        };
        let rendered = BodySegment::Description("alpha beta gamma".to_string())
            .render(&format)
            .unwrap();
        assert_eq!(rendered, "alpha beta\ngamma");
    }

    #[test]
    fn test_description_keeps_indented_lines() {
        let text = "Steps:|  1. run   `make  all`|  2. done".to_string();
        let rendered = BodySegment::Description(text)
            .render(&FormatConfig::default())
            .unwrap();
        assert_eq!(rendered, "Steps:\n  1. run   `make  all`\n  2. done");
    }
}
