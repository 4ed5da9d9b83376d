//! Error types for pdfpages.
//!
//! Every failure is one [`PdfPagesError`] variant, and every variant belongs
//! to exactly one [`ErrorKind`]. The kind is what callers (and the command
//! line front-end) branch on; the variant carries the context for the message.
//!
//! # Error Categories
//!
//! - **Not found**: missing input file, missing directory, missing page ordinal
//! - **Format**: input is not a `.pdf` document
//! - **Validation**: malformed page range, empty merge list, bad option combination
//! - **Codec**: the PDF could not be read or written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfpages operations.
pub type Result<T> = std::result::Result<T, PdfPagesError>;

/// Closed set of error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input path, directory or page ordinal does not exist.
    NotFound,
    /// The input is not a recognised document.
    Format,
    /// Arguments are malformed or inconsistent.
    Validation,
    /// The PDF could not be read or written.
    Codec,
}

impl ErrorKind {
    /// Process exit status for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Validation => 1,
            Self::NotFound => 2,
            Self::Format => 3,
            Self::Codec => 4,
        }
    }
}

/// Main error type for pdfpages operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfPagesError {
    /// Input file was not found.
    #[error("Input file not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// A directory that must exist was not found.
    #[error("Pages directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Path to the missing directory.
        path: PathBuf,
    },

    /// No page file matched an ordinal during range resolution.
    #[error("Page file not found for page {ordinal} with pattern {pattern}")]
    PageNotFound {
        /// 1-based ordinal that had no match.
        ordinal: u32,
        /// File name pattern that was looked up.
        pattern: String,
    },

    /// Input does not carry the `.pdf` extension.
    #[error("Input must be a PDF file, got: {}", extension_of(path))]
    NotAPdf {
        /// Offending path.
        path: PathBuf,
    },

    /// Page range token is not `START-END`.
    #[error("Invalid range format: {input}. Expected format: START-END (e.g., 1-5)")]
    InvalidRange {
        /// The token as supplied.
        input: String,
    },

    /// Merge was asked to combine zero files.
    #[error("No page files provided")]
    NoPagesToMerge,

    /// Invalid option combination.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Failed to assemble a document from selected pages.
    #[error("Failed to assemble pages: {reason}")]
    PageTree {
        /// Details about the failure.
        reason: String,
    },

    /// Failed to create output file or directory.
    #[error("Failed to create output: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A report could not be serialized.
    #[error("Failed to serialize report: {source}")]
    Json {
        /// Underlying serde_json error.
        #[from]
        source: serde_json::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

fn extension_of(path: &std::path::Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

impl PdfPagesError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a DirectoryNotFound error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: impl Into<PathBuf>) -> Self {
        Self::NotAPdf { path: path.into() }
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(input: impl Into<String>) -> Self {
        Self::InvalidRange {
            input: input.into(),
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a PageTree error.
    pub fn page_tree(reason: impl Into<String>) -> Self {
        Self::PageTree {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. }
            | Self::DirectoryNotFound { .. }
            | Self::PageNotFound { .. } => ErrorKind::NotFound,
            Self::NotAPdf { .. } => ErrorKind::Format,
            Self::InvalidRange { .. } | Self::NoPagesToMerge | Self::InvalidConfig { .. } => {
                ErrorKind::Validation
            }
            Self::FailedToLoadPdf { .. }
            | Self::PageTree { .. }
            | Self::FailedToCreateOutput { .. }
            | Self::FailedToWrite { .. }
            | Self::Json { .. }
            | Self::Io { .. } => ErrorKind::Codec,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

impl From<lopdf::Error> for PdfPagesError {
    fn from(err: lopdf::Error) -> Self {
        Self::page_tree(err.to_string())
    }
}
