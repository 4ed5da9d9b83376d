//! Content fingerprints for duplicate detection.
//!
//! A fingerprint is the SHA-256 digest of the text on a document's leading
//! pages. File names, metadata and object layout do not contribute, so the
//! same content saved twice under different names hashes the same.

use sha2::{Digest, Sha256};
use std::fmt;
use tracing::debug;

use crate::config::HashConfig;
use crate::error::Result;
use crate::io::{LoadedPdf, PdfReader};

/// A 256-bit content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint([u8; 32]);

impl ContentFingerprint {
    /// Digest of arbitrary text.
    pub fn of_text(text: &str) -> Self {
        Self(Sha256::digest(text.as_bytes()).into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Computes content fingerprints.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    reader: PdfReader,
}

impl ContentHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of the first `pages` pages of an already loaded document.
    ///
    /// Pages without extractable text contribute nothing; this never fails.
    pub fn fingerprint_loaded(&self, loaded: &LoadedPdf, pages: u32) -> ContentFingerprint {
        let text = loaded.leading_text(pages);
        let fingerprint = ContentFingerprint::of_text(&text);
        debug!(
            path = %loaded.path.display(),
            pages = loaded.prefix_len(pages),
            text_bytes = text.len(),
            %fingerprint,
            "fingerprinted"
        );
        fingerprint
    }

    /// Open `config.input` and fingerprint its first `config.pages` pages.
    ///
    /// # Errors
    ///
    /// Fails only if the document cannot be opened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdfpages::analysis::ContentHasher;
    /// use pdfpages::config::HashConfig;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = HashConfig { input: "report.pdf".into(), pages: 3 };
    /// let digest = ContentHasher::new().fingerprint(&config).await?;
    /// println!("{digest}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fingerprint(&self, config: &HashConfig) -> Result<ContentFingerprint> {
        let loaded = self.reader.open(&config.input).await?;
        Ok(self.fingerprint_loaded(&loaded, config.pages))
    }
}
