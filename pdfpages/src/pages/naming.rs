//! The `<stem>-page-<ordinal>.pdf` naming convention.
//!
//! A split page file carries its provenance in its name and nowhere else:
//! the stem of the document it came from and its 1-based position in that
//! document, zero-padded to four digits. Later stages recover ordering from
//! the name alone.

use std::fmt;
use std::path::Path;

/// Separator between stem and ordinal.
const PAGE_MARKER: &str = "-page-";

/// Extension of every page file.
const PAGE_EXTENSION: &str = ".pdf";

/// Persistent identity of a single split-out page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageFileName {
    stem: String,
    ordinal: u32,
}

impl PageFileName {
    /// Name for page `ordinal` of the document with `stem`.
    pub fn new(stem: impl Into<String>, ordinal: u32) -> Self {
        Self {
            stem: stem.into(),
            ordinal,
        }
    }

    /// Name for page `ordinal` of the document at `source`.
    ///
    /// The stem is the source's file name with its extension removed.
    pub fn for_source(source: &Path, ordinal: u32) -> Self {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(stem, ordinal)
    }

    /// Parse a file name such as `report-page-0003.pdf`.
    ///
    /// The split happens at the last `-page-`, so stems may themselves contain
    /// the marker. The ordinal must be written exactly as [`file_name`] would
    /// write it: `page-3` and `page-00003` are not page files.
    ///
    /// [`file_name`]: PageFileName::file_name
    pub fn parse(file_name: &str) -> Option<Self> {
        let base = file_name.strip_suffix(PAGE_EXTENSION)?;
        let (stem, digits) = base.rsplit_once(PAGE_MARKER)?;

        if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let ordinal: u32 = digits.parse().ok()?;
        if format!("{ordinal:04}") != digits {
            return None;
        }

        Some(Self::new(stem, ordinal))
    }

    /// Parse the final component of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()?.to_str().and_then(Self::parse)
    }

    /// Stem of the source document.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// 1-based position of the page in its source document.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// The file name, e.g. `report-page-0003.pdf`.
    pub fn file_name(&self) -> String {
        format!(
            "{}{PAGE_MARKER}{:04}{PAGE_EXTENSION}",
            self.stem, self.ordinal
        )
    }
}

impl fmt::Display for PageFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
