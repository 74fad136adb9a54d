//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// faqline - Turn business descriptions into FAQ sections.
#[derive(Debug, Parser)]
#[command(name = "faqline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FAQLINE_CONFIG")]
    pub config: Option<String>,

    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (questions only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract an FAQ section from a single description
    Extract(ExtractArgs),

    /// Extract FAQ sections from a JSON array of listings
    Batch(BatchArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Description text (omit to use --file or --stdin)
    pub text: Option<String>,

    /// Read the description from a file
    #[arg(short = 'i', long = "file")]
    pub file: Option<String>,

    /// Read the description from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Display name used in generated "About ..." questions
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file containing listings
    #[arg(short = 'i', long = "file")]
    pub file: Option<String>,

    /// Read the JSON array of listings from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["faqline"]).is_err());
    }

    #[test]
    fn test_extract_command() {
        let cli = Cli::try_parse_from([
            "faqline",
            "extract",
            "**Q?**A long enough answer.",
            "--name",
            "Acme Nails",
        ])
        .unwrap();
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.text.as_deref(), Some("**Q?**A long enough answer."));
                assert_eq!(args.name.as_deref(), Some("Acme Nails"));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["faqline", "batch", "--stdin", "-f", "json", "--no-color"])
            .unwrap();
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Batch(ref args) if args.stdin));
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::try_parse_from(["faqline", "config", "init", "--force"]).unwrap();
        match cli.command {
            Command::Config(ConfigArgs { action: ConfigAction::Init { force } }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
