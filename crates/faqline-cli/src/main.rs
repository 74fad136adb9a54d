//! faqline CLI - Turn business descriptions into FAQ sections.

use clap::Parser;
use faqline_cli::commands;
use faqline_cli::{Cli, Command, Config, Formatter};
use faqline_extractor::FaqExtractor;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let color_enabled = !cli.no_color;

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(faqline_cli::config::OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> faqline_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            let extractor = FaqExtractor::try_new(config.extractor)?;
            commands::execute_extract(args, &extractor, &formatter)?;
        }
        Command::Batch(args) => {
            let extractor = FaqExtractor::try_new(config.extractor)?;
            commands::execute_batch(args, &extractor, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
