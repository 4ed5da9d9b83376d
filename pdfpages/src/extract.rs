//! Extracting the leading pages of a document.

use std::path::PathBuf;
use tracing::info;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter, WriteStatistics};
use crate::pages::PageSelector;

/// Result of an extraction.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Where the extracted document was written.
    pub output: PathBuf,

    /// Pages actually extracted, after clamping to the document length.
    pub pages_extracted: u32,

    /// Pages in the source document.
    pub total_pages: u32,

    /// Statistics about writing the output.
    pub write: WriteStatistics,
}

/// Writes the first N pages of a document to a new document.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    reader: PdfReader,
    selector: PageSelector,
    writer: PdfWriter,
}

impl Extractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract `min(config.pages, total)` leading pages of `config.input`.
    ///
    /// The output keeps the input's file name and lands in
    /// `config.output_dir`, which is created if missing. Asking for more
    /// pages than the document has is not an error.
    ///
    /// # Errors
    ///
    /// Fails like [`crate::split::Splitter::split`] on a missing or non-PDF
    /// input, and with a validation error if the output would replace the
    /// input.
    pub async fn extract(&self, config: &ExtractConfig) -> Result<ExtractReport> {
        self.reader.check_input(&config.input).await?;
        config.validate()?;

        let loaded = self.reader.load(&config.input).await?;
        let pages_extracted = loaded.prefix_len(config.pages);
        let ordinals: Vec<u32> = (1..=pages_extracted).collect();

        let document = self.selector.select(&loaded.document, &ordinals)?;
        let output = config.output_path();
        let write = self.writer.save_with_stats(document, &output).await?;

        info!(
            input = %config.input.display(),
            output = %output.display(),
            pages = pages_extracted,
            "extract complete"
        );

        Ok(ExtractReport {
            output,
            pages_extracted,
            total_pages: loaded.page_count,
            write,
        })
    }
}
