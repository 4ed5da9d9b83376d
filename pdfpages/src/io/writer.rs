//! Writing page documents to disk.
//!
//! Every output (page file, merged document, extracted prefix) goes through
//! [`PdfWriter`]. Documents are serialized into a hidden sibling file and
//! renamed into place, so a reader scanning the directory never sees a
//! half-written page file under a valid page name.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpages::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let stats = PdfWriter::new()
//!     .save_with_stats(doc, Path::new("tmp/pages/report-page-0001.pdf"))
//!     .await?;
//! println!("{} written", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::debug;

use crate::error::{PdfPagesError, Result};
use crate::utils::format_file_size;

/// What a single save produced.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Final location of the document.
    pub output_path: PathBuf,
    /// Size on disk in bytes.
    pub file_size: u64,
    /// Time spent serializing and renaming.
    pub write_time: Duration,
    /// Whether content streams were compressed.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Size on disk, human readable.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Serializes lopdf documents with an atomic rename.
#[derive(Debug, Clone, Copy)]
pub struct PdfWriter {
    compress: bool,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl PdfWriter {
    /// Writer that compresses content streams before saving.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer that leaves content streams as they are.
    pub fn uncompressed() -> Self {
        Self { compress: false }
    }

    /// Save `doc` to `path`, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::FailedToCreateOutput`] if the directory or the
    /// temporary file cannot be created, and [`PdfPagesError::FailedToWrite`]
    /// if serialization or the final rename fails.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).await.map(|_| ())
    }

    /// Like [`save`](Self::save), returning what was written.
    pub async fn save_with_stats(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PdfPagesError::FailedToCreateOutput {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let target = path.to_path_buf();
        let compress = self.compress;

        let stats = task::spawn_blocking(move || write_atomically(doc, target, compress))
            .await
            .map_err(|e| PdfPagesError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(format!("write task failed: {e}")),
            })??;

        debug!(
            path = %stats.output_path.display(),
            bytes = stats.file_size,
            elapsed_ms = stats.write_time.as_millis() as u64,
            "wrote pdf"
        );

        Ok(stats)
    }
}

/// Hidden sibling used while `target` is being written.
fn partial_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.partial"))
}

fn write_atomically(mut doc: Document, target: PathBuf, compress: bool) -> Result<WriteStatistics> {
    let start = Instant::now();
    if compress {
        doc.compress();
    }

    let partial = partial_path(&target);
    let result = serialize(&mut doc, &partial).and_then(|()| {
        fs::rename(&partial, &target).map_err(|e| PdfPagesError::FailedToWrite {
            path: target.clone(),
            source: e,
        })
    });

    if let Err(err) = result {
        // Leftovers would only confuse the next run
        let _ = fs::remove_file(&partial);
        return Err(err);
    }

    let file_size = written_size(&target)?;
    Ok(WriteStatistics {
        output_path: target,
        file_size,
        write_time: start.elapsed(),
        compressed: compress,
    })
}

/// Size of the file just renamed into place.
fn written_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| PdfPagesError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn serialize(doc: &mut Document, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PdfPagesError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |source: std::io::Error| PdfPagesError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(file);
    doc.save_to(&mut out)
        .map_err(|e| write_err(std::io::Error::other(e.to_string())))?;
    out.flush().map_err(write_err)
}
