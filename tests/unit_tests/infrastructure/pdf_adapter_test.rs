use std::time::Duration;

use documiner::application::ports::{FileLoader, FileLoaderError};
use documiner::domain::Document;
use documiner::infrastructure::text_processing::{PdfAdapter, label_pages};

#[tokio::test]
async fn given_non_pdf_bytes_when_extracting_then_reports_not_a_pdf() {
    let adapter = PdfAdapter::new();
    let document = Document::new("notes.pdf", b"plain text pretending".to_vec());

    let error = adapter.extract_text(&document).await.unwrap_err();

    assert!(matches!(error, FileLoaderError::NotAPdf(name) if name == "notes.pdf"));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_reports_failure() {
    let adapter = PdfAdapter::with_timeout(Duration::from_secs(5));
    let document = Document::new("broken.pdf", b"%PDF-1.7\nthis is not a real pdf".to_vec());

    let error = adapter.extract_text(&document).await.unwrap_err();

    assert!(matches!(
        error,
        FileLoaderError::ExtractionFailed(_) | FileLoaderError::NoTextFound(_)
    ));
}

#[tokio::test]
async fn given_header_after_leading_bytes_when_extracting_then_passes_signature_check() {
    let adapter = PdfAdapter::with_timeout(Duration::from_secs(5));
    let mut data = b"\xEF\xBB\xBFjunk from a mail gateway\n".to_vec();
    data.extend_from_slice(b"%PDF-1.7\nthis is not a real pdf");
    let document = Document::new("forwarded.pdf", data);

    let error = adapter.extract_text(&document).await.unwrap_err();

    assert!(!matches!(error, FileLoaderError::NotAPdf(_)));
}

#[test]
fn given_pages_when_labelling_then_numbers_from_one_and_skips_blank_pages() {
    let pages = vec![
        "Intro  text".to_string(),
        "   \n ".to_string(),
        "Results".to_string(),
    ];

    let labelled = label_pages(pages);

    assert_eq!(labelled, ["[Page 1]\nIntro text", "[Page 3]\nResults"]);
}

#[test]
fn given_no_text_pages_when_labelling_then_returns_nothing() {
    assert!(label_pages(vec![String::new(), " ".to_string()]).is_empty());
}
