//! CLI argument parsing for pdfpages.
//!
//! This module defines the command-line interface structure using `clap`.
//! Each subcommand converts itself into the matching library config, which
//! is where option combinations are validated.
//!
//! # Examples
//!
//! ```text
//! pdfpages split report.pdf -o tmp/pages
//! pdfpages merge tmp/report-2-4.pdf -d tmp/pages -r 2-4 -s report
//! pdfpages extract report.pdf -p 3
//! pdfpages hash report.pdf
//! pdfpages stats report.pdf --json
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pdfpages::config::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PAGES_DIR, DEFAULT_PREFIX_PAGES, ExtractConfig, HashConfig,
    MergeConfig, SplitConfig, StatsConfig,
};
use pdfpages::error::Result;

/// Split PDF documents into page files and put them back together.
///
/// Split page files are named `<stem>-page-NNNN.pdf`. The merge command can
/// address them by range, so a later step can rebuild any run of pages
/// without knowing how the split was done.
#[derive(Parser, Debug)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Split PDFs into page files and merge page ranges back", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Suppress summaries; results and errors are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show details and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// The five page operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a PDF into single-page files named <stem>-page-NNNN.pdf
    Split(SplitArgs),

    /// Merge single-page PDF files into one document
    ///
    /// Pages come either from an explicit list of files or from a
    /// --pages-dir and --range pair.
    ///
    /// Examples:
    ///   pdfpages merge out.pdf a-page-0001.pdf a-page-0002.pdf
    ///   pdfpages merge out.pdf --pages-dir tmp/pages --range 2-4 --stem report
    Merge(MergeArgs),

    /// Write the first N pages of a PDF to a new file
    Extract(ExtractArgs),

    /// Print a SHA-256 fingerprint of the text on the first N pages
    Hash(HashArgs),

    /// Print file size, page count and token estimate
    Stats(StatsArgs),
}

/// Arguments for `split`.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the page files
    #[arg(short, long, value_name = "DIR")]
    #[arg(env = "PDFPAGES_PAGES_DIR", default_value = DEFAULT_PAGES_DIR)]
    pub output_dir: PathBuf,
}

impl SplitArgs {
    /// Convert into a split configuration.
    pub fn to_config(&self) -> SplitConfig {
        SplitConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Arguments for `merge`.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Path for the output PDF file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Single-page PDF files, merged in the order given
    #[arg(value_name = "PAGES")]
    pub pages: Vec<PathBuf>,

    /// Directory containing split page files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,

    /// Page range to merge, e.g. 1-5
    #[arg(short, long, value_name = "START-END")]
    pub range: Option<String>,

    /// Only use page files split from the document with this stem
    #[arg(short, long, value_name = "STEM")]
    pub stem: Option<String>,
}

impl MergeArgs {
    /// Convert into a validated merge configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when both or neither page sources are
    /// given, or the range is malformed.
    pub fn to_config(&self) -> Result<MergeConfig> {
        MergeConfig::from_parts(
            self.output.clone(),
            self.pages.clone(),
            self.pages_dir.clone(),
            self.range.as_deref(),
            self.stem.clone(),
        )
    }
}

/// Arguments for `extract`.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of leading pages to extract
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_PREFIX_PAGES)]
    pub pages: u32,

    /// Directory for the extracted file
    #[arg(short, long, value_name = "DIR")]
    #[arg(env = "PDFPAGES_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl ExtractArgs {
    /// Convert into an extract configuration.
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            pages: self.pages,
        }
    }
}

/// Arguments for `hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of leading pages to hash
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_PREFIX_PAGES)]
    pub pages: u32,
}

impl HashArgs {
    /// Convert into a hash configuration.
    pub fn to_config(&self) -> HashConfig {
        HashConfig {
            input: self.input.clone(),
            pages: self.pages,
        }
    }
}

/// Arguments for `stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of leading pages to analyze (default: all pages)
    #[arg(short, long, value_name = "N")]
    pub pages: Option<u32>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl StatsArgs {
    /// Convert into a stats configuration.
    pub fn to_config(&self) -> StatsConfig {
        StatsConfig {
            input: self.input.clone(),
            pages: self.pages,
            json: self.json,
        }
    }
}
