//! Command implementations.

pub mod batch;
pub mod config;
pub mod extract;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::extract::execute_extract;

use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read command input from exactly one of: inline text, a file, or stdin.
pub(crate) fn read_input(inline: Option<String>, file: Option<&str>, stdin: bool) -> Result<String> {
    let sources = usize::from(inline.is_some()) + usize::from(file.is_some()) + usize::from(stdin);
    if sources > 1 {
        return Err(CliError::InvalidInput(
            "Specify only one of inline text, --file or --stdin".to_string(),
        ));
    }

    if let Some(text) = inline {
        Ok(text)
    } else if let Some(path) = file {
        Ok(fs::read_to_string(path)?)
    } else if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(CliError::InvalidInput(
            "Must specify inline text, --file or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_inline_input() {
        let text = read_input(Some("hello".to_string()), None, false).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "**Q?**From a file.").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let text = read_input(None, Some(&path), false).unwrap();
        assert_eq!(text, "**Q?**From a file.");
    }

    #[test]
    fn test_no_input_is_rejected() {
        assert!(matches!(read_input(None, None, false), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_multiple_inputs_are_rejected() {
        let result = read_input(Some("text".to_string()), Some("file.txt"), false);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_input(None, Some("/definitely/not/here.txt"), false);
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
