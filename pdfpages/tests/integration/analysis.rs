//! Fingerprints, statistics and extraction on generated documents.

use pdfpages::analysis::{ContentHasher, StatsReporter};
use pdfpages::config::{ExtractConfig, HashConfig, StatsConfig};
use pdfpages::extract::Extractor;
use tempfile::TempDir;

use crate::common::{page_texts, text_pdf, write_text_pdf};

#[tokio::test]
async fn test_fingerprint_ignores_file_identity() {
    let temp_dir = TempDir::new().unwrap();
    let pages = ["Chapter one", "Chapter two", "Chapter three", "Chapter four"];
    let original = write_text_pdf(temp_dir.path(), "original.pdf", &pages);

    // Same leading text, different name, different trailing page and extra metadata
    let mut copy = text_pdf(&["Chapter one", "Chapter two", "Chapter three", "Epilogue"]);
    copy.trailer.set(
        "Info",
        lopdf::dictionary! { "Title" => lopdf::Object::string_literal("Copy") },
    );
    let renamed = temp_dir.path().join("renamed-copy.pdf");
    copy.save(&renamed).unwrap();

    let hasher = ContentHasher::new();
    let a = hasher
        .fingerprint(&HashConfig { input: original, pages: 3 })
        .await
        .unwrap();
    let b = hasher
        .fingerprint(&HashConfig { input: renamed, pages: 3 })
        .await
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_hex().len(), 64);
}

#[tokio::test]
async fn test_stats_token_estimate_for_thousand_words() {
    let temp_dir = TempDir::new().unwrap();
    let line = vec!["lorem"; 100].join(" ");
    let pages: Vec<&str> = std::iter::repeat_n(line.as_str(), 10).collect();
    let input = write_text_pdf(temp_dir.path(), "long.pdf", &pages);

    let stats = StatsReporter::new()
        .stats(&StatsConfig {
            input,
            pages: None,
            json: true,
        })
        .await
        .unwrap();

    assert_eq!(stats.total_pages, 10);
    assert_eq!(stats.pages_analyzed, 10);
    assert_eq!(stats.word_count, 1000);
    assert_eq!(stats.token_estimate, 1300);

    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["token_estimate"], 1300);
}

#[tokio::test]
async fn test_extract_writes_prefix_under_original_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_text_pdf(
        temp_dir.path(),
        "paper.pdf",
        &["intro", "method", "results", "refs"],
    );
    let output_dir = temp_dir.path().join("tmp");

    let report = Extractor::new()
        .extract(&ExtractConfig {
            input,
            output_dir: output_dir.clone(),
            pages: 3,
        })
        .await
        .unwrap();

    assert_eq!(report.output, output_dir.join("paper.pdf"));
    assert_eq!(page_texts(&report.output), vec!["intro", "method", "results"]);
}
