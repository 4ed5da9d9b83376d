//! Configuration module for pdfpages.
//!
//! This module holds the validated, normalized settings for each operation
//! together with the small value types they are built from:
//! - [`PageRange`], the `START-END` token accepted by range merges
//! - [`StemFilter`], the optional stem restriction applied when resolving page files
//! - one config struct per operation

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfPagesError, Result};
use crate::pages::naming::PageFileName;

/// Default directory single-page files are written to.
pub const DEFAULT_PAGES_DIR: &str = "tmp/pages";

/// Default directory extracted prefixes are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "tmp";

/// Default number of leading pages used by extract and hash.
pub const DEFAULT_PREFIX_PAGES: u32 = 3;

/// A closed interval `[start, end]` of 1-based page ordinals.
///
/// Parsed from a `START-END` token. No ordering is enforced between the two
/// bounds: a range whose start lies after its end is valid and empty.
///
/// # Examples
///
/// ```
/// use pdfpages::config::PageRange;
///
/// let range: PageRange = "2-4".parse().unwrap();
/// assert_eq!(range.ordinals().collect::<Vec<_>>(), vec![2, 3, 4]);
///
/// let empty: PageRange = "5-3".parse().unwrap();
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Create a range from its bounds.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Parse a `START-END` token.
    ///
    /// Both sides must be non-empty runs of ASCII digits separated by exactly
    /// one hyphen. Signs, whitespace and additional separators are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::InvalidRange`] if the token does not match, or
    /// if either number does not fit in a `u32`.
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PdfPagesError::invalid_range(s))?;

        let bound = |part: &str| -> Result<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PdfPagesError::invalid_range(s));
            }
            part.parse().map_err(|_| PdfPagesError::invalid_range(s))
        };

        Ok(Self {
            start: bound(start)?,
            end: bound(end)?,
        })
    }

    /// First ordinal of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last ordinal of the range (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// True if the range selects no ordinals (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of ordinals in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Ordinals in ascending order.
    pub fn ordinals(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl FromStr for PageRange {
    type Err = PdfPagesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Which stems a page-file lookup accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StemFilter {
    /// Any stem (`*-page-NNNN.pdf`).
    #[default]
    Any,
    /// Exactly this stem (`<stem>-page-NNNN.pdf`).
    Exact(String),
}

impl StemFilter {
    /// Build a filter from an optional CLI value; blank strings mean "any".
    pub fn from_option(stem: Option<String>) -> Self {
        match stem {
            Some(stem) if !stem.is_empty() => Self::Exact(stem),
            _ => Self::Any,
        }
    }

    /// True if a page file with `stem` passes this filter.
    pub fn accepts(&self, stem: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == stem,
        }
    }

    /// The file name pattern this filter looks up for `ordinal`.
    pub fn pattern_for(&self, ordinal: u32) -> String {
        match self {
            Self::Any => PageFileName::new("*", ordinal).file_name(),
            Self::Exact(stem) => PageFileName::new(stem.clone(), ordinal).file_name(),
        }
    }
}

/// Settings for splitting a document into single-page files.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Document to split.
    pub input: PathBuf,
    /// Directory receiving `<stem>-page-NNNN.pdf` files.
    pub output_dir: PathBuf,
}

/// Where a merge takes its page files from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeSource {
    /// An explicit, ordered list of page files.
    Files(Vec<PathBuf>),
    /// Page files resolved from a directory by range and stem.
    Range {
        /// Directory holding split page files.
        pages_dir: PathBuf,
        /// Ordinals to merge.
        range: PageRange,
        /// Optional stem restriction.
        stem: StemFilter,
    },
}

/// Settings for merging single-page files into one document.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Output document path.
    pub output: PathBuf,
    /// Page files to merge.
    pub source: MergeSource,
}

impl MergeConfig {
    /// Build a merge configuration from raw command line values.
    ///
    /// Exactly one source must be given: either a non-empty list of files, or
    /// both a pages directory and a range.
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing or conflicting sources and for a
    /// malformed range token.
    pub fn from_parts(
        output: PathBuf,
        files: Vec<PathBuf>,
        pages_dir: Option<PathBuf>,
        range: Option<&str>,
        stem: Option<String>,
    ) -> Result<Self> {
        let source = match (pages_dir, range) {
            (Some(_), Some(_)) if !files.is_empty() => {
                return Err(PdfPagesError::invalid_config(
                    "Provide either page files or --pages-dir with --range, not both",
                ));
            }
            (Some(pages_dir), Some(range)) => MergeSource::Range {
                pages_dir,
                range: PageRange::parse(range)?,
                stem: StemFilter::from_option(stem),
            },
            (Some(_), None) => {
                return Err(PdfPagesError::invalid_config("--pages-dir requires --range"));
            }
            (None, Some(_)) => {
                return Err(PdfPagesError::invalid_config("--range requires --pages-dir"));
            }
            (None, None) if files.is_empty() => {
                return Err(PdfPagesError::invalid_config(
                    "Provide either page files or --pages-dir with --range",
                ));
            }
            (None, None) => MergeSource::Files(files),
        };

        Ok(Self { output, source })
    }
}

/// Settings for extracting the leading pages of a document.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Source document.
    pub input: PathBuf,
    /// Directory receiving the extracted document.
    pub output_dir: PathBuf,
    /// Number of leading pages to keep.
    pub pages: u32,
}

impl ExtractConfig {
    /// Path the extracted document is written to.
    ///
    /// The file keeps the source document's file name.
    pub fn output_path(&self) -> PathBuf {
        match self.input.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.join("extracted.pdf"),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the output path would overwrite the input.
    pub fn validate(&self) -> Result<()> {
        if same_location(&self.input, &self.output_path()) {
            return Err(PdfPagesError::invalid_config(format!(
                "Output file cannot be the same as the input file: {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// Settings for fingerprinting a document.
#[derive(Debug, Clone)]
pub struct HashConfig {
    /// Source document.
    pub input: PathBuf,
    /// Number of leading pages whose text is hashed.
    pub pages: u32,
}

/// Settings for reporting document statistics.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Source document.
    pub input: PathBuf,
    /// Number of leading pages to analyze; all pages when `None`.
    pub pages: Option<u32>,
    /// Print machine-readable JSON instead of text.
    pub json: bool,
}

/// True if two paths refer to the same file, comparing canonical forms when
/// both exist and the literal paths otherwise.
fn same_location(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
