//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Label used in synthesized questions when the caller supplies none
pub const DEFAULT_LABEL: &str = "This Business";

/// Word placed before the label in synthesized questions
pub const DEFAULT_QUESTION_PREFIX: &str = "About";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Label substituted into the fallback question when no label is given
    pub default_label: String,

    /// Leading word of the fallback question ("About" → "About Acme")
    pub question_prefix: String,
}

impl ExtractorConfig {
    /// Create a configuration with a custom default label
    pub fn with_default_label(label: impl Into<String>) -> Self {
        Self {
            default_label: label.into(),
            ..Self::default()
        }
    }

    /// Build the question used for segments without a recognized marker
    pub fn fallback_question(&self, label: Option<&str>) -> String {
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_label.trim());
        format!("{} {}", self.question_prefix.trim(), label)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.default_label.trim().is_empty() {
            return Err(ExtractorError::Config(
                "default_label must not be empty".to_string(),
            ));
        }
        if self.question_prefix.trim().is_empty() {
            return Err(ExtractorError::Config(
                "question_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_label: DEFAULT_LABEL.to_string(),
            question_prefix: DEFAULT_QUESTION_PREFIX.to_string(),
        }
    }
}
