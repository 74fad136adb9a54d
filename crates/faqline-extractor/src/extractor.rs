//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_segment;
use crate::segment::split_segments;
use crate::types::FaqSection;
use tracing::{debug, trace};

/// The Extractor turns a free-form description into FAQ records
#[derive(Debug, Clone, Default)]
pub struct FaqExtractor {
    config: ExtractorConfig,
}

impl FaqExtractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create a new Extractor, rejecting invalid configuration
    pub fn try_new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract FAQ records from a description.
    ///
    /// Returns `None` when `text` is absent or empty. Otherwise returns the
    /// records in order of appearance, dropping any whose answer is too
    /// short to be useful. Whitespace-only text is treated as present and
    /// yields an empty list.
    pub fn extract(&self, text: Option<&str>, fallback_label: Option<&str>) -> FaqSection {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return None,
        };

        let fallback_question = self.config.fallback_question(fallback_label);
        let segments = split_segments(text);

        let mut records = Vec::with_capacity(segments.len());
        let mut dropped = 0;

        for (idx, segment) in segments.iter().enumerate() {
            let (record, convention) = parse_segment(segment, &fallback_question);
            trace!(segment = idx, ?convention, question = %record.question, "Parsed segment");

            if record.has_substantive_answer() {
                records.push(record);
            } else {
                dropped += 1;
            }
        }

        debug!(
            "Extracted {} FAQ records from {} segments ({} dropped)",
            records.len(),
            segments.len(),
            dropped
        );

        Some(records)
    }

    /// Extract from an owned or borrowed optional string
    pub fn extract_from<S: AsRef<str>>(
        &self,
        text: Option<S>,
        fallback_label: Option<&str>,
    ) -> FaqSection {
        self.extract(text.as_ref().map(|s| s.as_ref()), fallback_label)
    }
}

/// Extract FAQ records using the default configuration
pub fn extract_faq(text: Option<&str>, fallback_label: Option<&str>) -> FaqSection {
    FaqExtractor::default().extract(text, fallback_label)
}
