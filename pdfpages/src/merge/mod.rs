//! Merging single-page files back into one document.
//!
//! A merge takes its inputs either from a literal list of page files or from
//! a page range resolved against a split directory; both produce the same
//! ordered, pre-validated list before any document is opened.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::config::MergeConfig;
//! use pdfpages::merge::merge_pages;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MergeConfig::from_parts(
//!     PathBuf::from("tmp/report-2-4.pdf"),
//!     Vec::new(),
//!     Some(PathBuf::from("tmp/pages")),
//!     Some("2-4"),
//!     Some("report".to_string()),
//! )?;
//!
//! let report = merge_pages(&config).await?;
//! println!("Merged {} pages into: {}", report.page_count(), report.output.display());
//! # Ok(())
//! # }
//! ```

pub mod merger;

pub use merger::{MergeResult, MergeStatistics, Merger};

use std::path::PathBuf;
use tracing::info;

use crate::config::{MergeConfig, MergeSource};
use crate::error::Result;
use crate::io::{PdfWriter, WriteStatistics};
use crate::pages::resolve_range;

/// Outcome of [`merge_pages`].
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Where the merged document was written.
    pub output: PathBuf,

    /// Page files merged, in order.
    pub merged_files: Vec<PathBuf>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Statistics about writing the output.
    pub write: WriteStatistics,
}

impl MergeReport {
    /// Number of pages in the written document.
    pub fn page_count(&self) -> usize {
        self.statistics.total_pages
    }
}

/// Collect the ordered page files a merge will read.
///
/// # Errors
///
/// For a range source, fails as [`resolve_range`] does. A file list is
/// returned as given.
pub fn page_files(source: &MergeSource) -> Result<Vec<PathBuf>> {
    match source {
        MergeSource::Files(files) => Ok(files.clone()),
        MergeSource::Range {
            pages_dir,
            range,
            stem,
        } => resolve_range(pages_dir, *range, stem),
    }
}

/// Resolve, merge and write according to `config`.
///
/// # Errors
///
/// Returns an error if page resolution fails, the list is empty, any page
/// file is missing or unreadable, or the output cannot be written.
pub async fn merge_pages(config: &MergeConfig) -> Result<MergeReport> {
    let files = page_files(&config.source)?;

    let result = Merger::new().merge(&files).await?;
    let write = PdfWriter::new()
        .save_with_stats(result.document, &config.output)
        .await?;

    info!(
        output = %config.output.display(),
        pages = result.statistics.total_pages,
        size = %write.format_file_size(),
        "merge complete"
    );

    Ok(MergeReport {
        output: config.output.clone(),
        merged_files: result.merged_files,
        statistics: result.statistics,
        write,
    })
}
