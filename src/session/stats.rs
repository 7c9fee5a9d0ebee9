use std::collections::HashSet;

use super::models::ResponseModel;

/// Tokens of a response: runs of whitespace separate words.
/// Submission validation and word counting both go through here.
pub fn tokens(text: &str) -> std::str::SplitWhitespace<'_> {
    text.split_whitespace()
}

pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// Derived counts over a session's responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseStats {
    pub total_responses: usize,
    /// Distinct lower-cased tokens; punctuation is kept, so `sky.` and `sky` differ
    pub unique_words: usize,
    /// Distinct nicknames, compared exactly
    pub active_students: usize,
}

/// Recomputes the statistics from the full response list
pub fn aggregate(responses: &[ResponseModel]) -> ResponseStats {
    let active_students = responses
        .iter()
        .map(|r| r.nickname.as_str())
        .collect::<HashSet<_>>()
        .len();

    let unique_words = responses
        .iter()
        .flat_map(|r| tokens(&r.text).map(str::to_lowercase))
        .collect::<HashSet<_>>()
        .len();

    ResponseStats {
        total_responses: responses.len(),
        unique_words,
        active_students,
    }
}
