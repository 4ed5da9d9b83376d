//! PDF reading and text extraction.
//!
//! This module is the read half of the page codec:
//! - input checks shared by every operation (existence, `.pdf` extension)
//! - loading a document off the async runtime
//! - per-page plain text extraction that never fails
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.open(Path::new("report.pdf")).await?;
//! println!("{} pages, first page says: {}", loaded.page_count, loaded.page_text(1));
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::debug;

use crate::error::{PdfPagesError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: u32,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration, file_size: u64) -> Self {
        let page_count = document.get_pages().len() as u32;

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }

    /// Number of leading pages actually available out of `requested`.
    pub fn prefix_len(&self, requested: u32) -> u32 {
        requested.min(self.page_count)
    }

    /// Plain text of page `ordinal` (1-based).
    ///
    /// Pages without extractable text, and pages the extractor cannot decode,
    /// yield an empty string.
    pub fn page_text(&self, ordinal: u32) -> String {
        match self.document.extract_text(&[ordinal]) {
            Ok(text) => text,
            Err(err) => {
                debug!(
                    path = %self.path.display(),
                    ordinal,
                    error = %err,
                    "no extractable text on page"
                );
                String::new()
            }
        }
    }

    /// Text of the first `min(pages, page_count)` pages, concatenated in page
    /// order without a separator.
    pub fn leading_text(&self, pages: u32) -> String {
        (1..=self.prefix_len(pages))
            .map(|ordinal| self.page_text(ordinal))
            .collect()
    }
}

/// PDF reader.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Check that `path` exists and names a PDF document.
    ///
    /// # Errors
    ///
    /// - [`PdfPagesError::FileNotFound`] if nothing exists at `path`
    /// - [`PdfPagesError::NotAPdf`] if the extension is not `.pdf` (any case)
    pub async fn check_input(&self, path: &Path) -> Result<()> {
        let exists = tokio::fs::try_exists(path).await?;
        if !exists {
            return Err(PdfPagesError::file_not_found(path));
        }

        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(PdfPagesError::not_a_pdf(path));
        }

        Ok(())
    }

    /// Check `path` with [`check_input`](Self::check_input), then load it.
    pub async fn open(&self, path: &Path) -> Result<LoadedPdf> {
        self.check_input(path).await?;
        self.load(path).await
    }

    /// Load a single PDF document without checking its name.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::FailedToLoadPdf`] if the file cannot be read or
    /// is not a parseable PDF.
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let start = Instant::now();

        let file_size = tokio::fs::metadata(path)
            .await
            .map_err(|e| PdfPagesError::failed_to_load_pdf(path, e.to_string()))?
            .len();

        let load_path = path_buf.clone();
        let doc = task::spawn_blocking(move || Document::load(&load_path))
            .await
            .map_err(|e| PdfPagesError::failed_to_load_pdf(path, format!("load task failed: {e}")))?
            .map_err(|e| PdfPagesError::failed_to_load_pdf(path, e.to_string()))?;

        let loaded = LoadedPdf::new(doc, path_buf, start.elapsed(), file_size);
        debug!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            bytes = loaded.file_size,
            elapsed_ms = loaded.load_time.as_millis() as u64,
            "loaded pdf"
        );

        Ok(loaded)
    }
}
