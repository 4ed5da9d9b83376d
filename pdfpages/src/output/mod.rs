//! Output formatting and display for pdfpages.
//!
//! Each command has a summary renderer returning the lines it prints, and a
//! `display_*` function that sends those lines through an
//! [`OutputFormatter`]. Renderers are pure so the exact text is testable.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::output::{OutputFormatter, display_merge};
//! # use pdfpages::merge::MergeReport;
//!
//! # fn example(report: &MergeReport) {
//! let formatter = OutputFormatter::new(false, false);
//! display_merge(&formatter, report);
//! # }
//! ```

pub mod formatter;

pub use formatter::{OutputFormatter, Verbosity};

use crate::analysis::{ContentFingerprint, DocumentStats};
use crate::error::Result;
use crate::extract::ExtractReport;
use crate::merge::MergeReport;
use crate::split::SplitReport;

/// Lines summarizing a split.
pub fn split_summary(report: &SplitReport) -> Vec<String> {
    let mut lines = vec![
        format!("Split into {} pages:", report.page_count()),
        format!("  Directory: {}", report.output_dir.display()),
    ];
    if let Some((first, last)) = report.name_span() {
        lines.push(format!("  Files: {first} to {last}"));
    }
    lines
}

/// Line summarizing a merge.
pub fn merge_summary(report: &MergeReport) -> String {
    format!(
        "Merged {} pages into: {}",
        report.page_count(),
        report.output.display()
    )
}

/// Line summarizing an extraction.
pub fn extract_summary(report: &ExtractReport) -> String {
    format!(
        "Extracted {} pages to: {}",
        report.pages_extracted,
        report.output.display()
    )
}

/// Display a split summary.
pub fn display_split(formatter: &OutputFormatter, report: &SplitReport) {
    for line in split_summary(report) {
        formatter.info(&line);
    }
}

/// Display a merge summary, with per-file details in verbose mode.
pub fn display_merge(formatter: &OutputFormatter, report: &MergeReport) {
    formatter.info(&merge_summary(report));

    for (i, file) in report.merged_files.iter().enumerate() {
        formatter.detail(&format!("Page {}", i + 1), &file.display().to_string());
    }
    formatter.detail("Input size", &report.statistics.format_input_size());
    formatter.detail("Output size", &report.write.format_file_size());
    formatter.detail(
        "Elapsed",
        &format!("{:.2}s", report.statistics.merge_time.as_secs_f64()),
    );
}

/// Display an extraction summary.
pub fn display_extract(formatter: &OutputFormatter, report: &ExtractReport) {
    formatter.info(&extract_summary(report));
    formatter.detail("Source pages", &report.total_pages.to_string());
    formatter.detail("Output size", &report.write.format_file_size());
}

/// Display a fingerprint: the hex digest alone.
pub fn display_fingerprint(formatter: &OutputFormatter, fingerprint: &ContentFingerprint) {
    formatter.result(&fingerprint.to_hex());
}

/// Display document statistics as text or as one line of JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn display_stats(
    formatter: &OutputFormatter,
    stats: &DocumentStats,
    json: bool,
) -> Result<()> {
    if json {
        formatter.result(&stats.to_json()?);
    } else {
        formatter.result(&stats.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageFileName;
    use std::path::PathBuf;

    fn split_report(pages: u32) -> SplitReport {
        let names: Vec<PageFileName> = (1..=pages)
            .map(|n| PageFileName::new("report", n))
            .collect();
        let files = names
            .iter()
            .map(|n| PathBuf::from("tmp/pages").join(n.file_name()))
            .collect();
        SplitReport {
            output_dir: PathBuf::from("tmp/pages"),
            names,
            files,
        }
    }

    #[test]
    fn test_split_summary() {
        assert_eq!(
            split_summary(&split_report(5)),
            vec![
                "Split into 5 pages:",
                "  Directory: tmp/pages",
                "  Files: report-page-0001.pdf to report-page-0005.pdf",
            ]
        );
    }

    #[test]
    fn test_split_summary_without_pages() {
        assert_eq!(
            split_summary(&split_report(0)),
            vec!["Split into 0 pages:", "  Directory: tmp/pages"]
        );
    }

    #[test]
    fn test_display_does_not_panic_when_quiet() {
        display_split(&OutputFormatter::quiet(), &split_report(2));
    }
}
