//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use faqline_extractor::{FaqExtractor, FaqSection};

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    extractor: &FaqExtractor,
    formatter: &Formatter,
) -> Result<()> {
    let section = run_extract(args, extractor)?;
    println!("{}", formatter.format_section(&section)?);
    Ok(())
}

fn run_extract(args: ExtractArgs, extractor: &FaqExtractor) -> Result<FaqSection> {
    let description = read_input(args.text, args.file.as_deref(), args.stdin)?;
    Ok(extractor.extract(Some(description.as_str()), args.name.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, name: Option<&str>) -> ExtractArgs {
        ExtractArgs {
            text: Some(text.to_string()),
            file: None,
            stdin: false,
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_extract_inline_text() {
        let extractor = FaqExtractor::default();
        let section = run_extract(
            args("Intro text here. **Q1**Answer one is long enough.", Some("Acme Salon")),
            &extractor,
        )
        .unwrap()
        .unwrap();

        assert_eq!(section.len(), 2);
        assert_eq!(section[0].question, "About Acme Salon");
        assert_eq!(section[1].question, "Q1");
    }

    #[test]
    fn test_extract_empty_text_is_absent() {
        let extractor = FaqExtractor::default();
        let section = run_extract(args("", None), &extractor).unwrap();
        assert!(section.is_none());
    }
}
