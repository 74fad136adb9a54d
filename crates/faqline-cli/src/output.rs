//! Output formatting for the CLI.

use crate::commands::batch::ListingFaq;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use faqline_extractor::{FaqRecord, FaqSection};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the FAQ section of one description.
    pub fn format_section(&self, section: &FaqSection) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(section)?),
            OutputFormat::Table => Ok(self.format_section_table(section)),
            OutputFormat::Quiet => Ok(self.format_records_quiet(section.as_deref().unwrap_or_default())),
        }
    }

    /// Format the FAQ sections of several listings.
    pub fn format_batch(&self, listings: &[ListingFaq]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(listings)?),
            OutputFormat::Table => Ok(self.format_batch_table(listings)),
            OutputFormat::Quiet => {
                let records: Vec<FaqRecord> = listings
                    .iter()
                    .filter_map(|listing| listing.faq.as_ref())
                    .flatten()
                    .cloned()
                    .collect();
                Ok(self.format_records_quiet(&records))
            }
        }
    }

    /// Format a section as a table.
    fn format_section_table(&self, section: &FaqSection) -> String {
        let records = match section {
            None => return self.colorize("No description provided.", "yellow"),
            Some(records) if records.is_empty() => {
                return self.colorize("No FAQ entries found.", "yellow");
            }
            Some(records) => records,
        };

        let mut builder = Builder::default();
        builder.push_record(["#", "Question", "Answer"]);

        for (idx, record) in records.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                record.question.clone(),
                record.answer.clone(),
            ]);
        }

        self.render(builder)
    }

    /// Format several listings as one table.
    fn format_batch_table(&self, listings: &[ListingFaq]) -> String {
        if listings.iter().all(|listing| !listing.has_content()) {
            return self.colorize("No FAQ entries found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Listing", "Question", "Answer"]);

        for listing in listings {
            let name = listing.name.as_deref().unwrap_or("-");
            for record in listing.faq.iter().flatten() {
                builder.push_record([name, record.question.as_str(), record.answer.as_str()]);
            }
        }

        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format records in quiet mode (questions only).
    fn format_records_quiet(&self, records: &[FaqRecord]) -> String {
        let questions: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        questions.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> FaqSection {
        Some(vec![
            FaqRecord::new("What hours?", "We are open 9-5 daily."),
            FaqRecord::new("Parking?", "Free parking out the back."),
        ])
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_section(&sample_section()).unwrap();
        assert!(output.contains("\"question\": \"What hours?\""));
        assert!(output.contains("\"answer\""));
    }

    #[test]
    fn test_json_absent_section_is_null() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_section(&None).unwrap(), "null");
        assert_eq!(formatter.format_section(&Some(vec![])).unwrap(), "[]");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_section(&sample_section()).unwrap();
        assert_eq!(output, "What hours?\nParking?");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_section(&sample_section()).unwrap();
        assert!(output.contains("Question"));
        assert!(output.contains("Free parking out the back."));
    }

    #[test]
    fn test_empty_and_absent_tables() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.format_section(&None).unwrap().contains("No description"));
        assert!(formatter.format_section(&Some(vec![])).unwrap().contains("No FAQ entries"));
    }

    #[test]
    fn test_batch_table_and_quiet() {
        let listings = vec![
            ListingFaq {
                name: Some("Acme Nails".to_string()),
                faq: sample_section(),
            },
            ListingFaq {
                name: None,
                faq: None,
            },
        ];

        let table = Formatter::new(OutputFormat::Table, false)
            .format_batch(&listings)
            .unwrap();
        assert!(table.contains("Acme Nails"));
        assert!(table.contains("Listing"));

        let quiet = Formatter::new(OutputFormat::Quiet, false)
            .format_batch(&listings)
            .unwrap();
        assert_eq!(quiet, "What hours?\nParking?");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
