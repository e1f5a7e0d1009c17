use std::fmt;

/// Release tier reported by a commit analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseType {
    Patch,
    Minor,
    Major,
}

/// Release impact of a composed commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ReleaseClassification {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl ReleaseClassification {
    /// Human-readable sentence shown to the user after composing
    pub fn describe(&self) -> &'static str {
        match self {
            ReleaseClassification::None => "This commit does not indicate any release",
            ReleaseClassification::Patch => "🛠  This commit indicates a patch release (0.0.X)",
            ReleaseClassification::Minor => "✨  This commit indicates a minor release (0.X.0)",
            ReleaseClassification::Major => "💥  This commit indicates a major release (X.0.0)",
        }
    }
}

impl From<ReleaseType> for ReleaseClassification {
    fn from(release: ReleaseType) -> Self {
        match release {
            ReleaseType::Patch => ReleaseClassification::Patch,
            ReleaseType::Minor => ReleaseClassification::Minor,
            ReleaseType::Major => ReleaseClassification::Major,
        }
    }
}

impl From<Option<ReleaseType>> for ReleaseClassification {
    fn from(release: Option<ReleaseType>) -> Self {
        release.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Display for ReleaseClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
