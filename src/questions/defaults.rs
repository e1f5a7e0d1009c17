use crate::collaborators::PackageListing;
use crate::config::Config;
use crate::domain::{names, Choice, Question, QuestionList};

/// Build the default question sequence.
///
/// Order is fixed: type, scope, subject, body, breaking, footer, packages. The
/// `packages` question offers every listed package and preselects the changed
/// ones; without a listing it offers nothing.
pub fn build_default_questions(config: &Config, listing: Option<&PackageListing>) -> QuestionList {
    let type_choices = config
        .types
        .iter()
        .map(|commit_type| Choice::new(commit_type.label(), commit_type.value.clone()))
        .collect();

    let (package_choices, changed) = match listing {
        Some(listing) => (
            listing
                .packages
                .iter()
                .map(|package| Choice::from(package.name.as_str()))
                .collect(),
            listing.changed.clone(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    let detected = changed.len();

    QuestionList::from_unique(vec![
        Question::list(
            names::TYPE,
            "Select the type of change that you're committing:",
            type_choices,
        ),
        Question::input(names::SCOPE, "Denote the scope of this change:"),
        Question::input(
            names::SUBJECT,
            "Write a short, imperative tense description of the change:\n",
        )
        .required(),
        Question::input(
            names::BODY,
            format!(
                "Provide a longer description of the change (optional). Use \"{}\" to break new line:\n",
                config.format.breakline_char
            ),
        ),
        Question::input(names::BREAKING, "List any BREAKING CHANGES (optional):\n"),
        Question::input(
            names::FOOTER,
            "List any ISSUES CLOSED by this change (optional). E.g.: #31, #34:\n",
        ),
        Question::checkbox(
            names::PACKAGES,
            format!(
                "The packages that this commit has affected ({} detected)\n",
                detected
            ),
            package_choices,
            changed,
        ),
    ])
}
