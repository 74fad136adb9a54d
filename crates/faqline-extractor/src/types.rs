//! Record types produced by extraction

use serde::{Deserialize, Serialize};

/// Answers this short (in characters, after trimming) are dropped
pub const MIN_ANSWER_CHARS: usize = 10;

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Question text, trimmed
    pub question: String,

    /// Answer text, trimmed
    pub answer: String,
}

impl FaqRecord {
    /// Create a record, trimming both fields
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        }
    }

    /// Whether the answer carries enough content to be shown
    pub fn has_substantive_answer(&self) -> bool {
        self.answer.chars().count() > MIN_ANSWER_CHARS
    }
}

/// Extraction output: `None` when there was no description at all,
/// `Some` (possibly empty) otherwise
pub type FaqSection = Option<Vec<FaqRecord>>;

/// Collapse "no description" and "no records" into one predicate
pub fn has_content(section: &FaqSection) -> bool {
    section.as_ref().is_some_and(|records| !records.is_empty())
}
