use std::fmt;

/// Non-fatal conditions met while composing a commit.
/// These are reported to the user but never abort the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionWarning {
    /// The package lister failed; the packages question offers no choices
    PackageListingFailed { reason: String },
    /// The header exceeded the line width and was cropped
    HeaderCropped { length: usize, max: usize },
}

impl fmt::Display for SessionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionWarning::PackageListingFailed { reason } => {
                write!(f, "Could not list packages ({}); no packages offered", reason)
            }
            SessionWarning::HeaderCropped { length, max } => {
                write!(
                    f,
                    "Header is {} characters long and was cropped to {}",
                    length, max
                )
            }
        }
    }
}
