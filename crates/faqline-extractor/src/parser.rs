//! Recognize the question convention of a single segment

use crate::types::FaqRecord;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref HTML_QUESTION: Regex = Regex::new(r"(?s)^<strong>(.*?)</strong>(.*)$").unwrap();
    static ref MARKDOWN_QUESTION: Regex = Regex::new(r"(?s)^\*\*(.+?)\*\*(.*)$").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"</?[^>]+(?:>|$)").unwrap();
}

/// A recognized question markup convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `<strong>Question</strong>Answer`
    Html,
    /// `**Question**Answer`
    Markdown,
}

impl Convention {
    /// Conventions in the order they are tried
    pub const PRIORITY: [Convention; 2] = [Convention::Html, Convention::Markdown];

    fn pattern(self) -> &'static Regex {
        match self {
            Convention::Html => &*HTML_QUESTION,
            Convention::Markdown => &*MARKDOWN_QUESTION,
        }
    }

    /// Split a segment into raw (question, answer) if it follows this convention
    pub fn split<'a>(self, segment: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.pattern().captures(segment)?;
        let question = caps.get(1).map_or("", |m| m.as_str());
        let answer = caps.get(2).map_or("", |m| m.as_str());
        Some((question, answer))
    }

    /// Post-process a raw answer. Only HTML answers lose their tags;
    /// markdown answers pass through as written.
    fn clean_answer(self, answer: &str) -> Cow<'_, str> {
        match self {
            Convention::Html => strip_tags(answer),
            Convention::Markdown => Cow::Borrowed(answer),
        }
    }
}

/// Remove every `<...>` tag, keeping the enclosed text. An unterminated tag
/// swallows the rest of the text.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    HTML_TAG.replace_all(text, "")
}

/// Find the first convention, in priority order, that the segment follows
pub fn classify(segment: &str) -> Option<Convention> {
    Convention::PRIORITY
        .into_iter()
        .find(|convention| convention.pattern().is_match(segment))
}

/// Turn one segment into a record.
///
/// Segments that follow no convention become the answer to
/// `fallback_question`. Returns the convention that matched, if any.
pub(crate) fn parse_segment(
    segment: &str,
    fallback_question: &str,
) -> (FaqRecord, Option<Convention>) {
    for convention in Convention::PRIORITY {
        if let Some((question, answer)) = convention.split(segment) {
            let answer = convention.clean_answer(answer);
            return (FaqRecord::new(question, &answer), Some(convention));
        }
    }

    (FaqRecord::new(fallback_question, segment), None)
}
