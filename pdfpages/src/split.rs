//! Splitting a document into single-page files.
//!
//! Page `i` of `report.pdf` is written alone to `report-page-000i.pdf` in the
//! output directory; these names are what [`crate::pages::PageIndex`] reads
//! back when a range is merged later.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::SplitConfig;
use crate::error::{PdfPagesError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::pages::{PageFileName, PageSelector};

/// Result of a split.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Directory the page files were written to.
    pub output_dir: PathBuf,

    /// Names of the page files, in ordinal order.
    pub names: Vec<PageFileName>,

    /// Full paths of the page files, in ordinal order.
    pub files: Vec<PathBuf>,
}

impl SplitReport {
    /// Number of page files written.
    pub fn page_count(&self) -> usize {
        self.files.len()
    }

    /// First and last file names, if any pages were written.
    pub fn name_span(&self) -> Option<(&PageFileName, &PageFileName)> {
        Some((self.names.first()?, self.names.last()?))
    }
}

/// Splits documents into single-page files.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    reader: PdfReader,
    selector: PageSelector,
    writer: PdfWriter,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `config.input` into `config.output_dir`.
    ///
    /// The output directory is created if missing. A document without pages
    /// produces an empty report.
    ///
    /// # Errors
    ///
    /// - [`PdfPagesError::FileNotFound`] if the input does not exist
    /// - [`PdfPagesError::NotAPdf`] if it is not named `*.pdf`
    /// - a codec error if it cannot be read or a page cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdfpages::config::SplitConfig;
    /// use pdfpages::split::Splitter;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SplitConfig {
    ///     input: "report.pdf".into(),
    ///     output_dir: "tmp/pages".into(),
    /// };
    /// let report = Splitter::new().split(&config).await?;
    /// assert_eq!(report.files[0].file_name().unwrap(), "report-page-0001.pdf");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn split(&self, config: &SplitConfig) -> Result<SplitReport> {
        let loaded = self.reader.open(&config.input).await?;

        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|e| PdfPagesError::FailedToCreateOutput {
                path: config.output_dir.clone(),
                source: e,
            })?;

        let mut names = Vec::with_capacity(loaded.page_count as usize);
        let mut files = Vec::with_capacity(loaded.page_count as usize);

        for (ordinal, page_id) in loaded.document.get_pages() {
            let name = PageFileName::for_source(&config.input, ordinal);
            let path = config.output_dir.join(name.file_name());

            let page = self.selector.select_pages(&loaded.document, &[page_id])?;
            self.writer.save(page, &path).await?;
            debug!(ordinal, path = %path.display(), "wrote page file");

            names.push(name);
            files.push(path);
        }

        info!(
            input = %config.input.display(),
            pages = files.len(),
            output_dir = %config.output_dir.display(),
            "split complete"
        );

        Ok(SplitReport {
            output_dir: config.output_dir.clone(),
            names,
            files,
        })
    }
}
