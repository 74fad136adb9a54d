//! faqline Extractor
//!
//! Turns a free-form business description into an ordered list of
//! question/answer records for an FAQ section.
//!
//! # Overview
//!
//! Descriptions are written by hand and mark their questions inconsistently:
//! some use `<strong>` tags, some use markdown `**bold**`, some use nothing.
//! The extractor recognizes exactly those two conventions and gives every
//! other piece of text a generated "About ..." question.
//!
//! # Architecture
//!
//! ```text
//! Description → split at markers → classify each segment → filter → records
//! ```
//!
//! Segments are classified by trying [`Convention::PRIORITY`] in order:
//! HTML first, then markdown. Answers from the HTML convention have their
//! tags stripped; markdown answers are kept verbatim. Records whose answer
//! is [`MIN_ANSWER_CHARS`] characters or fewer are dropped.
//!
//! Extraction is pure and never fails. `None` means there was no description;
//! `Some(vec![])` means there was one but it produced no usable records.
//!
//! # Example Usage
//!
//! ```
//! use faqline_extractor::{FaqExtractor, ExtractorConfig};
//!
//! let extractor = FaqExtractor::new(ExtractorConfig::default());
//!
//! let records = extractor
//!     .extract(
//!         Some("Family run since 1998. **Do you take walk-ins?**Yes, most weekdays."),
//!         Some("Acme Nails"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].question, "About Acme Nails");
//! assert_eq!(records[1].question, "Do you take walk-ins?");
//! assert_eq!(records[1].answer, "Yes, most weekdays.");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod segment;
mod parser;
mod extractor;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, DEFAULT_LABEL, DEFAULT_QUESTION_PREFIX};
pub use types::{has_content, FaqRecord, FaqSection, MIN_ANSWER_CHARS};
pub use parser::{classify, strip_tags, Convention};
pub use extractor::{extract_faq, FaqExtractor};
