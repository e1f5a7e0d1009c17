//! Terminal reporter.
//!
//! Prints session output with `console` styling: notices plain, warnings in
//! yellow on stderr, the release classification in green and the composed
//! message in blue.

use console::{style, Term};

use crate::collaborators::Reporter;
use crate::domain::ReleaseClassification;
use crate::warnings::SessionWarning;

/// [Reporter] writing to the process's stdout and stderr.
///
/// Write errors are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter
    }

    fn write_out(&self, text: &str) {
        let _ = Term::stdout().write_line(text);
    }
}

impl Reporter for ConsoleReporter {
    fn notice(&self, text: &str) {
        self.write_out(&format!("\n\n{}\n", text));
    }

    fn warning(&self, warning: &SessionWarning) {
        let line = format!("{} {}", style("⚠ WARNING:").yellow(), warning);
        let _ = Term::stderr().write_line(&line);
    }

    fn classification(&self, classification: ReleaseClassification) {
        self.write_out(&format!("\n{}\n", style(classification.describe()).green()));
    }

    fn message(&self, message: &str) {
        self.write_out("\n\nCommit message:");
        self.write_out(&format!("\n\n{}\n", style(message).blue()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reporter_output() {
        // Visual verification test - output is printed to stdout/stderr
        let reporter = ConsoleReporter::default();
        reporter.notice("Line 1 will be cropped at 100 characters.");
        reporter.warning(&SessionWarning::HeaderCropped {
            length: 120,
            max: 100,
        });
        reporter.classification(ReleaseClassification::Minor);
        reporter.message("feat(core): add thing");
    }
}
