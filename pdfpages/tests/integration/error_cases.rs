//! Integration tests for error handling and edge cases.

use pdfpages::analysis::StatsReporter;
use pdfpages::config::{MergeConfig, PageRange, SplitConfig, StatsConfig, StemFilter};
use pdfpages::error::{ErrorKind, PdfPagesError};
use pdfpages::merge::{Merger, merge_pages};
use pdfpages::pages::resolve_range;
use pdfpages::split::Splitter;
use rstest::rstest;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::write_text_pdf;

#[tokio::test]
async fn test_error_nonexistent_input() {
    let err = Splitter::new()
        .split(&SplitConfig {
            input: PathBuf::from("/nonexistent/file.pdf"),
            output_dir: PathBuf::from("/nonexistent/pages"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPagesError::FileNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_error_wrong_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("report.txt");
    std::fs::write(&input, b"plain text").unwrap();

    let err = StatsReporter::new()
        .stats(&StatsConfig {
            input,
            pages: None,
            json: false,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_error_corrupted_pdf_is_codec_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.pdf");
    std::fs::write(&input, b"this is not a pdf").unwrap();

    let err = Splitter::new()
        .split(&SplitConfig {
            input,
            output_dir: temp_dir.path().join("pages"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Codec);
}

#[tokio::test]
async fn test_error_single_gap_fails_whole_range() {
    let temp_dir = TempDir::new().unwrap();
    for n in [1, 2, 4, 5] {
        let name = format!("doc-page-{n:04}.pdf");
        write_text_pdf(temp_dir.path(), &name, &["page"]);
    }

    let err =
        resolve_range(temp_dir.path(), PageRange::new(1, 5), &StemFilter::Any).unwrap_err();
    match err {
        PdfPagesError::PageNotFound { ordinal, ref pattern } => {
            assert_eq!(ordinal, 3);
            assert_eq!(pattern, "*-page-0003.pdf");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_error_missing_pages_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = MergeConfig::from_parts(
        temp_dir.path().join("out.pdf"),
        Vec::new(),
        Some(temp_dir.path().join("missing")),
        Some("1-3"),
        None,
    )
    .unwrap();

    let err = merge_pages(&config).await.unwrap_err();
    assert!(matches!(err, PdfPagesError::DirectoryNotFound { .. }));
}

#[tokio::test]
async fn test_error_empty_merge_list() {
    let err = Merger::new().merge(&[]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_error_missing_file_in_list_is_named() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_text_pdf(temp_dir.path(), "a-page-0001.pdf", &["one"]);
    let missing = temp_dir.path().join("a-page-0002.pdf");

    let err = Merger::new()
        .merge(&[first, missing.clone()])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("a-page-0002.pdf"));
    assert!(matches!(err, PdfPagesError::FileNotFound { path } if path == missing));
}

#[test]
fn test_empty_range_resolves_empty() {
    let temp_dir = TempDir::new().unwrap();
    let files = resolve_range(temp_dir.path(), PageRange::new(3, 1), &StemFilter::Any).unwrap();
    assert!(files.is_empty());
}

#[rstest]
#[case("")]
#[case("5")]
#[case("1-")]
#[case("-3")]
#[case("1-2-3")]
#[case("a-b")]
#[case("1 - 3")]
#[case("+1-3")]
fn test_malformed_range_is_validation_error(#[case] token: &str) {
    let err = MergeConfig::from_parts(
        PathBuf::from("out.pdf"),
        Vec::new(),
        Some(PathBuf::from("pages")),
        Some(token),
        None,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation, "token {token:?}");
    assert_eq!(err.exit_code(), 1);
}
