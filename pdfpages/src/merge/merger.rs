//! Core page merging implementation.
//!
//! This module concatenates single-page documents, in the order given, into
//! one document.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::error::{PdfPagesError, Result};
use crate::io::{LoadedPdf, PdfReader};
use crate::pages::PageSelector;
use crate::pages::select::root_pages_id;
use crate::utils::format_file_size;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of page files merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge.
    pub merge_time: Duration,

    /// Time spent loading inputs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged, in merge order.
    pub merged_files: Vec<PathBuf>,
}

/// Merger that concatenates single-page documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Page selector used to keep the first page of each input.
    selector: PageSelector,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `files` into one document, one page per file, in order.
    ///
    /// Inputs are opened one at a time; an input that does not exist fails
    /// the merge before any later input is read. Only the first page of each
    /// input is used.
    ///
    /// # Errors
    ///
    /// - [`PdfPagesError::NoPagesToMerge`] if `files` is empty
    /// - [`PdfPagesError::FileNotFound`] naming the first missing input
    /// - a codec error if an input cannot be loaded or has no pages
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfpages::merge::Merger;
    /// # use std::path::PathBuf;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let files = vec![
    ///     PathBuf::from("tmp/pages/report-page-0002.pdf"),
    ///     PathBuf::from("tmp/pages/report-page-0003.pdf"),
    /// ];
    /// let result = Merger::new().merge(&files).await?;
    /// assert_eq!(result.statistics.total_pages, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, files: &[PathBuf]) -> Result<MergeResult> {
        let merge_start = Instant::now();
        let mut load_time = Duration::ZERO;
        let mut input_size = 0;
        let mut merged: Option<Document> = None;

        for path in files {
            let loaded = self.load_input(path).await?;
            load_time += loaded.load_time;
            input_size += loaded.file_size;

            if loaded.page_count > 1 {
                warn!(
                    path = %path.display(),
                    pages = loaded.page_count,
                    "input has more than one page; only the first is merged"
                );
            }

            let page = self.selector.select(&loaded.document, &[1])?;
            match merged.as_mut() {
                None => merged = Some(page),
                Some(doc) => self.append_pages(doc, page)?,
            }
        }

        let mut document = merged.ok_or(PdfPagesError::NoPagesToMerge)?;
        document.prune_objects();
        document.renumber_objects();

        let statistics = MergeStatistics {
            files_merged: files.len(),
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        debug!(
            files = statistics.files_merged,
            pages = statistics.total_pages,
            elapsed_ms = statistics.merge_time.as_millis() as u64,
            "merged page files"
        );

        Ok(MergeResult {
            document,
            statistics,
            merged_files: files.to_vec(),
        })
    }

    async fn load_input(&self, path: &Path) -> Result<LoadedPdf> {
        if !tokio::fs::try_exists(path).await? {
            return Err(PdfPagesError::file_not_found(path));
        }
        self.reader.load(path).await
    }

    /// Move every page of `doc` onto the end of `merged`'s page tree.
    fn append_pages(&self, merged: &mut Document, mut doc: Document) -> Result<()> {
        // Renumber objects to avoid ID conflicts
        doc.renumber_objects_with(merged.max_id + 1);
        merged.max_id = doc.max_id;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        merged.objects.extend(doc.objects);

        self.add_pages_to_tree(merged, &page_ids)
    }

    /// Add pages to the merged document's page tree.
    fn add_pages_to_tree(&self, merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let pages_id = root_pages_id(merged)?;

        for &page_id in page_ids {
            merged
                .get_dictionary_mut(page_id)?
                .set("Parent", Object::Reference(pages_id));
        }

        let pages_dict = merged.get_dictionary_mut(pages_id)?;

        match pages_dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => {
                kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));
            }
            _ => {
                return Err(PdfPagesError::page_tree(
                    "Pages dictionary missing Kids array",
                ));
            }
        }

        let current_count = pages_dict
            .get(b"Count")
            .and_then(Object::as_i64)
            .unwrap_or(0);
        pages_dict.set(
            "Count",
            Object::Integer(current_count + page_ids.len() as i64),
        );

        Ok(())
    }
}
