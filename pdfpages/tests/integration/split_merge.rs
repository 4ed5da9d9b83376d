//! Split, resolve and merge end to end.

use pdfpages::config::{MergeConfig, PageRange, SplitConfig, StemFilter};
use pdfpages::merge::{Merger, merge_pages};
use pdfpages::pages::{PageIndex, resolve_range};
use pdfpages::split::Splitter;
use tempfile::TempDir;

use crate::common::{file_names, page_texts, write_text_pdf};

const REPORT: [&str; 5] = [
    "Quarterly report",
    "Revenue grew",
    "Costs fell",
    "Outlook steady",
    "Appendix tables",
];

#[tokio::test]
async fn test_report_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_text_pdf(temp_dir.path(), "report.pdf", &REPORT);
    let pages_dir = temp_dir.path().join("tmp").join("pages");

    let split = Splitter::new()
        .split(&SplitConfig {
            input,
            output_dir: pages_dir.clone(),
        })
        .await
        .unwrap();

    assert_eq!(
        file_names(&split.files),
        vec![
            "report-page-0001.pdf",
            "report-page-0002.pdf",
            "report-page-0003.pdf",
            "report-page-0004.pdf",
            "report-page-0005.pdf",
        ]
    );

    let stem = StemFilter::Exact("report".into());
    let resolved = resolve_range(&pages_dir, PageRange::new(2, 4), &stem).unwrap();
    assert_eq!(
        resolved,
        vec![
            pages_dir.join("report-page-0002.pdf"),
            pages_dir.join("report-page-0003.pdf"),
            pages_dir.join("report-page-0004.pdf"),
        ]
    );

    let output = temp_dir.path().join("tmp").join("report-2-4.pdf");
    let config = MergeConfig::from_parts(
        output.clone(),
        Vec::new(),
        Some(pages_dir),
        Some("2-4"),
        Some("report".into()),
    )
    .unwrap();
    let merged = merge_pages(&config).await.unwrap();

    assert_eq!(merged.page_count(), 3);
    assert_eq!(
        page_texts(&output),
        vec!["Revenue grew", "Costs fell", "Outlook steady"]
    );
}

#[tokio::test]
async fn test_full_range_resolves_to_split_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_text_pdf(temp_dir.path(), "deck.pdf", &REPORT);
    let pages_dir = temp_dir.path().join("pages");

    let split = Splitter::new()
        .split(&SplitConfig {
            input,
            output_dir: pages_dir.clone(),
        })
        .await
        .unwrap();

    let total = split.page_count() as u32;
    let index = PageIndex::scan(&pages_dir, &StemFilter::Exact("deck".into())).unwrap();
    assert_eq!(index.len(), REPORT.len());
    assert_eq!(index.resolve(PageRange::new(1, total)).unwrap(), split.files);
}

#[tokio::test]
async fn test_merge_of_split_round_trips_text() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_text_pdf(temp_dir.path(), "book.pdf", &REPORT);
    let original = page_texts(&input);

    let split = Splitter::new()
        .split(&SplitConfig {
            input,
            output_dir: temp_dir.path().join("pages"),
        })
        .await
        .unwrap();

    let output = temp_dir.path().join("rebuilt").join("book.pdf");
    let config = MergeConfig::from_parts(output.clone(), split.files, None, None, None).unwrap();
    let merged = merge_pages(&config).await.unwrap();

    assert_eq!(merged.page_count(), REPORT.len());
    assert_eq!(page_texts(&output), original);
}

#[tokio::test]
async fn test_two_documents_in_one_directory() {
    let temp_dir = TempDir::new().unwrap();
    let pages_dir = temp_dir.path().join("pages");
    let alpha = write_text_pdf(temp_dir.path(), "alpha.pdf", &["a one", "a two"]);
    let beta = write_text_pdf(temp_dir.path(), "beta.pdf", &["b one", "b two"]);

    let splitter = Splitter::new();
    for input in [alpha, beta] {
        splitter
            .split(&SplitConfig {
                input,
                output_dir: pages_dir.clone(),
            })
            .await
            .unwrap();
    }

    let beta = StemFilter::Exact("beta".into());
    let beta_only = resolve_range(&pages_dir, PageRange::new(1, 2), &beta).unwrap();
    assert_eq!(
        file_names(&beta_only),
        vec!["beta-page-0001.pdf", "beta-page-0002.pdf"]
    );

    // Without a stem the smallest name wins every ordinal
    let any = resolve_range(&pages_dir, PageRange::new(1, 2), &StemFilter::Any).unwrap();
    assert_eq!(
        file_names(&any),
        vec!["alpha-page-0001.pdf", "alpha-page-0002.pdf"]
    );

    let merged = Merger::new().merge(&beta_only).await.unwrap();
    assert_eq!(merged.statistics.total_pages, 2);
}
