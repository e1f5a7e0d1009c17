use tracing::debug;

use crate::domain::{Question, QuestionList};

/// Replace default questions with same-named overrides.
///
/// Walks `defaults` in order and substitutes the first override whose name
/// matches. Overrides naming no default are dropped, so the result always has
/// the length and order of `defaults`.
pub fn merge_questions(defaults: &QuestionList, overrides: &[Question]) -> QuestionList {
    let merged = defaults
        .iter()
        .map(|default| {
            overrides
                .iter()
                .find(|candidate| candidate.name == default.name)
                .unwrap_or(default)
                .clone()
        })
        .collect();

    for dropped in overrides.iter().filter(|o| defaults.get(&o.name).is_none()) {
        debug!(question = %dropped.name, "override matches no default question, ignoring");
    }

    QuestionList::from_unique(merged)
}
