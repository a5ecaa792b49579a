use crate::db::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page slice of an id-ordered question list. Pages past the end of
/// the data (and the invalid page 0) come back empty; callers decide whether
/// an empty page is an error.
pub fn paginate(questions: &[Question], page: usize) -> &[Question] {
    let start = match page.checked_sub(1) {
        Some(page) => page * QUESTIONS_PER_PAGE,
        None => return &[],
    };
    if start >= questions.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}
