//! pdfpages - Split PDF documents into page files and put them back together.
//!
//! Split page files are named `<stem>-page-NNNN.pdf`; that name is the only
//! record of which document a page came from and where it sat. Later steps
//! address pages by range through the name alone. The library provides:
//!
//! - Splitting a document into single-page files
//! - Resolving a page range to an ordered list of page files
//! - Merging page files back into one document
//! - Extracting the leading pages of a document
//! - Content fingerprints for duplicate detection
//! - Size and token-count statistics
//!
//! # Examples
//!
//! ## Split, then merge a range
//!
//! ```no_run
//! use pdfpages::config::{MergeConfig, SplitConfig};
//! use pdfpages::merge::merge_pages;
//! use pdfpages::split::Splitter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let split = Splitter::new()
//!     .split(&SplitConfig {
//!         input: PathBuf::from("report.pdf"),
//!         output_dir: PathBuf::from("tmp/pages"),
//!     })
//!     .await?;
//! println!("{} page files", split.page_count());
//!
//! let config = MergeConfig::from_parts(
//!     PathBuf::from("tmp/report-2-4.pdf"),
//!     Vec::new(),
//!     Some(PathBuf::from("tmp/pages")),
//!     Some("2-4"),
//!     Some("report".to_string()),
//! )?;
//! let merged = merge_pages(&config).await?;
//! assert_eq!(merged.page_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolving without touching documents
//!
//! ```no_run
//! use pdfpages::config::{PageRange, StemFilter};
//! use pdfpages::pages::resolve_range;
//! use std::path::Path;
//!
//! let range: PageRange = "2-4".parse()?;
//! let files = resolve_range(Path::new("tmp/pages"), range, &StemFilter::Any)?;
//! for file in files {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), pdfpages::PdfPagesError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod merge;
pub mod output;
pub mod pages;
pub mod split;
pub mod utils;

// Re-export commonly used types
pub use config::{PageRange, StemFilter};
pub use error::{ErrorKind, PdfPagesError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// In-memory documents for unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};
    use std::path::{Path, PathBuf};

    /// A document with one page per entry of `pages`, each showing that text
    /// in Courier. Resources and MediaBox live on the page tree root.
    pub(crate) fn text_pdf(pages: &[&str]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::with_capacity(pages.len());
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages.len() as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    /// Save [`text_pdf`] as `dir/name` and return its path.
    pub(crate) fn write_text_pdf(dir: &Path, name: &str, pages: &[&str]) -> PathBuf {
        let path = dir.join(name);
        text_pdf(pages).save(&path).unwrap();
        path
    }
}
