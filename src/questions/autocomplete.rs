use crate::domain::{QuestionKind, QuestionList};

/// Turn single-choice questions into searchable autocomplete questions.
///
/// Choices, order and every other question are left as they are.
pub fn autocomplete_questions(questions: QuestionList) -> QuestionList {
    let converted = questions
        .into_vec()
        .into_iter()
        .map(|mut question| {
            if question.kind == QuestionKind::List {
                question.kind = QuestionKind::Autocomplete;
            }
            question
        })
        .collect();

    QuestionList::from_unique(converted)
}
