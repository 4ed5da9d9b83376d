//! Resolution of symbolic page ranges into ordered page files.
//!
//! A [`PageIndex`] maps ordinals to the page files that carry them. It is
//! built by listing a directory once ([`PageIndex::scan`]) or from any list of
//! paths ([`PageIndex::from_paths`]), and answers range queries without
//! touching the filesystem again. Resolution is all-or-nothing: either every
//! ordinal in the range has a file, or the first one without a file is
//! reported and nothing is returned.
//!
//! When several files share an ordinal (only possible without a stem filter,
//! when two documents were split into the same directory) the lexicographically
//! smallest path wins.
//!
//! # Examples
//!
//! ```
//! use pdfpages::config::{PageRange, StemFilter};
//! use pdfpages::pages::PageIndex;
//! use std::path::PathBuf;
//!
//! let index = PageIndex::from_paths(
//!     ["a-page-0001.pdf", "a-page-0002.pdf"].map(PathBuf::from),
//!     &StemFilter::Any,
//! );
//! let files = index.resolve(PageRange::new(1, 2)).unwrap();
//! assert_eq!(files.len(), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::{PageRange, StemFilter};
use crate::error::{PdfPagesError, Result};
use crate::pages::naming::PageFileName;

/// Ordinal → candidate page files, built by one scan.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    filter: StemFilter,
    entries: BTreeMap<u32, BTreeSet<PathBuf>>,
}

impl PageIndex {
    /// Index the page files directly inside `dir`.
    ///
    /// Only regular files whose names follow the page naming convention and
    /// pass `filter` are indexed; subdirectories are not descended into.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::DirectoryNotFound`] if `dir` does not exist or
    /// is not a directory, and an I/O error if it cannot be listed.
    pub fn scan(dir: &Path, filter: &StemFilter) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PdfPagesError::directory_not_found(dir));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| PdfPagesError::Io {
                source: err.into(),
            })?;
            if entry.path().is_file() {
                paths.push(entry.into_path());
            }
        }

        let index = Self::from_paths(paths, filter);
        debug!(
            dir = %dir.display(),
            ordinals = index.entries.len(),
            "indexed page files"
        );
        Ok(index)
    }

    /// Index an arbitrary list of paths.
    ///
    /// Paths whose file names are not page file names, or whose stem fails
    /// `filter`, are ignored.
    pub fn from_paths<I>(paths: I, filter: &StemFilter) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut entries: BTreeMap<u32, BTreeSet<PathBuf>> = BTreeMap::new();

        for path in paths {
            let Some(name) = PageFileName::from_path(&path) else {
                continue;
            };
            if filter.accepts(name.stem()) {
                entries.entry(name.ordinal()).or_default().insert(path);
            }
        }

        Self {
            filter: filter.clone(),
            entries,
        }
    }

    /// Number of distinct ordinals with at least one file.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no page files were indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The file chosen for `ordinal`, if any.
    pub fn get(&self, ordinal: u32) -> Option<&Path> {
        self.entries
            .get(&ordinal)
            .and_then(|candidates| candidates.first())
            .map(PathBuf::as_path)
    }

    /// Every file indexed for `ordinal`, smallest first.
    pub fn candidates(&self, ordinal: u32) -> impl Iterator<Item = &Path> {
        self.entries
            .get(&ordinal)
            .into_iter()
            .flat_map(|candidates| candidates.iter().map(PathBuf::as_path))
    }

    /// Resolve `range` to one file per ordinal, in ascending ordinal order.
    ///
    /// An empty range (`start > end`) resolves to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::PageNotFound`] for the first ordinal that has
    /// no file. No partial list is ever returned.
    pub fn resolve(&self, range: PageRange) -> Result<Vec<PathBuf>> {
        // Never more files than indexed ordinals, whatever the range claims
        let mut files = Vec::with_capacity(range.len().min(self.entries.len()));

        for ordinal in range.ordinals() {
            let path = self.get(ordinal).ok_or_else(|| PdfPagesError::PageNotFound {
                ordinal,
                pattern: self.filter.pattern_for(ordinal),
            })?;

            if self.candidates(ordinal).nth(1).is_some() {
                debug!(
                    ordinal,
                    chosen = %path.display(),
                    "several page files share this ordinal; picked the smallest name"
                );
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }
}

/// Resolve `range` against the page files in `pages_dir`.
///
/// Lists the directory once and resolves every ordinal from that listing.
///
/// # Errors
///
/// Returns [`PdfPagesError::DirectoryNotFound`] if `pages_dir` does not exist
/// (checked before any ordinal), or [`PdfPagesError::PageNotFound`] for the
/// first ordinal without a file.
///
/// # Examples
///
/// ```no_run
/// use pdfpages::config::{PageRange, StemFilter};
/// use pdfpages::pages::resolve_range;
/// use std::path::Path;
///
/// let stem = StemFilter::Exact("report".into());
/// let files = resolve_range(Path::new("tmp/pages"), PageRange::new(2, 4), &stem)?;
/// assert_eq!(files.len(), 3);
/// # Ok::<(), pdfpages::PdfPagesError>(())
/// ```
pub fn resolve_range(
    pages_dir: &Path,
    range: PageRange,
    stem: &StemFilter,
) -> Result<Vec<PathBuf>> {
    PageIndex::scan(pages_dir, stem)?.resolve(range)
}
