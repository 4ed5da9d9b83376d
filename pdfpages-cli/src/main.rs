//! pdfpages - Split PDF documents into page files and put them back together.

mod cli;

use clap::Parser;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use pdfpages::analysis::{ContentHasher, StatsReporter};
use pdfpages::error::{ErrorKind, PdfPagesError};
use pdfpages::extract::Extractor;
use pdfpages::merge::merge_pages;
use pdfpages::output::{
    OutputFormatter, display_extract, display_fingerprint, display_merge, display_split,
    display_stats,
};
use pdfpages::split::Splitter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    // Run the command and map failures to exit codes
    if let Err(err) = run(cli.command, &formatter).await {
        formatter.error(&error_message(&err));
        process::exit(err.exit_code());
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The line printed on stderr for a failed command.
fn error_message(err: &PdfPagesError) -> String {
    match err.kind() {
        ErrorKind::Codec => format!("Error processing PDF: {err}"),
        ErrorKind::NotFound | ErrorKind::Format | ErrorKind::Validation => {
            format!("Error: {err}")
        }
    }
}

/// Main application logic.
async fn run(command: Command, formatter: &OutputFormatter) -> Result<(), PdfPagesError> {
    debug!(?command, "{} v{}", pdfpages::NAME, pdfpages::VERSION);

    match command {
        Command::Split(args) => {
            let report = Splitter::new().split(&args.to_config()).await?;
            display_split(formatter, &report);
        }
        Command::Merge(args) => {
            let report = merge_pages(&args.to_config()?).await?;
            display_merge(formatter, &report);
        }
        Command::Extract(args) => {
            let report = Extractor::new().extract(&args.to_config()).await?;
            display_extract(formatter, &report);
        }
        Command::Hash(args) => {
            let fingerprint = ContentHasher::new().fingerprint(&args.to_config()).await?;
            display_fingerprint(formatter, &fingerprint);
        }
        Command::Stats(args) => {
            let config = args.to_config();
            let stats = StatsReporter::new().stats(&config).await?;
            display_stats(formatter, &stats, config.json)?;
        }
    }

    Ok(())
}
