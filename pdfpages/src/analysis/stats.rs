//! Size and length statistics.

use serde::Serialize;

use crate::config::StatsConfig;
use crate::error::Result;
use crate::io::{LoadedPdf, PdfReader};
use crate::utils::{format_file_size, group_thousands};

/// Statistics about one document.
///
/// Serializes to the JSON object printed by `pdfpages stats --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// File size in bytes.
    pub file_size_bytes: u64,
    /// File size for humans, e.g. `2.4 MB`.
    pub file_size_human: String,
    /// Pages in the document.
    pub total_pages: u32,
    /// Leading pages whose text was counted.
    pub pages_analyzed: u32,
    /// Whitespace-delimited words in the analyzed text.
    pub word_count: u64,
    /// Approximate LLM token count, `floor(word_count * 1.3)`.
    pub token_estimate: u64,
}

impl DocumentStats {
    /// Build statistics from already extracted text.
    pub fn from_text(
        file_size_bytes: u64,
        total_pages: u32,
        pages_analyzed: u32,
        text: &str,
    ) -> Self {
        let word_count = text.split_whitespace().count() as u64;

        Self {
            file_size_bytes,
            file_size_human: format_file_size(file_size_bytes),
            total_pages,
            pages_analyzed,
            word_count,
            token_estimate: estimate_tokens(word_count),
        }
    }

    /// Statistics over the first `pages` pages of `loaded`, or all pages.
    pub fn for_document(loaded: &LoadedPdf, pages: Option<u32>) -> Self {
        let pages_analyzed = pages.map_or(loaded.page_count, |n| loaded.prefix_len(n));
        let text = loaded.leading_text(pages_analyzed);
        Self::from_text(loaded.file_size, loaded.page_count, pages_analyzed, &text)
    }

    /// Human-readable report, one statistic per line. Word and token counts
    /// carry thousands separators.
    pub fn to_text(&self) -> String {
        format!(
            "File size: {} ({} bytes)\n\
             Total pages: {}\n\
             Pages analyzed: {}\n\
             Word count: {}\n\
             Token estimate: {}",
            self.file_size_human,
            self.file_size_bytes,
            self.total_pages,
            self.pages_analyzed,
            group_thousands(self.word_count),
            group_thousands(self.token_estimate),
        )
    }

    /// Compact JSON report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `floor(words * 1.3)`, in integer arithmetic.
pub fn estimate_tokens(words: u64) -> u64 {
    words.saturating_mul(13) / 10
}

/// Reports document statistics.
#[derive(Debug, Clone, Default)]
pub struct StatsReporter {
    reader: PdfReader,
}

impl StatsReporter {
    /// Create a new reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `config.input` and compute its statistics.
    ///
    /// # Errors
    ///
    /// Fails only if the document cannot be opened.
    pub async fn stats(&self, config: &StatsConfig) -> Result<DocumentStats> {
        let loaded = self.reader.open(&config.input).await?;
        Ok(DocumentStats::for_document(&loaded, config.pages))
    }
}
