//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use faqline_extractor::{has_content, FaqExtractor, FaqSection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A listing as stored upstream: a display name and a free-form description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Display name, used in generated "About ..." questions
    pub name: Option<String>,
    /// Description that may embed question/answer pairs
    pub description: Option<String>,
}

/// The FAQ section extracted for one listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListingFaq {
    /// Display name of the listing
    pub name: Option<String>,
    /// Extracted records, `null` when the listing had no description
    pub faq: FaqSection,
}

impl ListingFaq {
    /// Whether this listing produced anything to show.
    pub fn has_content(&self) -> bool {
        has_content(&self.faq)
    }
}

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, extractor: &FaqExtractor, formatter: &Formatter) -> Result<()> {
    let json_data = read_input(None, args.file.as_deref(), args.stdin)?;
    let listings: Vec<Listing> = serde_json::from_str(&json_data)?;

    if listings.is_empty() {
        return Err(CliError::InvalidInput("No listings provided".to_string()));
    }

    let results = extract_listings(listings, extractor);
    let with_content = results.iter().filter(|r| r.has_content()).count();

    println!("{}", formatter.format_batch(&results)?);
    for warning in missing_description_warnings(&results, formatter) {
        eprintln!("{}", warning);
    }
    eprintln!(
        "{}",
        formatter.info(&format!(
            "{} of {} listing(s) have FAQ entries",
            with_content,
            results.len()
        ))
    );

    Ok(())
}

/// One warning per listing that had no description at all.
fn missing_description_warnings(results: &[ListingFaq], formatter: &Formatter) -> Vec<String> {
    results
        .iter()
        .enumerate()
        .filter(|(_, result)| result.faq.is_none())
        .map(|(idx, result)| {
            let name = result
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", idx + 1));
            formatter.warning(&format!("Listing {} has no description", name))
        })
        .collect()
}

/// Extract the FAQ section of every listing, keeping input order.
pub fn extract_listings(listings: Vec<Listing>, extractor: &FaqExtractor) -> Vec<ListingFaq> {
    listings
        .into_iter()
        .map(|listing| {
            let faq = extractor.extract(listing.description.as_deref(), listing.name.as_deref());
            debug!(
                name = listing.name.as_deref().unwrap_or("-"),
                records = faq.as_ref().map_or(0, Vec::len),
                "Processed listing"
            );
            ListingFaq {
                name: listing.name,
                faq,
            }
        })
        .collect()
}
