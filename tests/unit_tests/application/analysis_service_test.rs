use std::sync::Arc;

use documiner::application::services::{AnalysisError, AnalysisService};
use documiner::domain::{AnalysisParameters, Document, Tone};

use super::mocks::{RecordingLlmClient, TextFileLoader};

fn params() -> AnalysisParameters {
    AnalysisParameters::new("AI Researcher", "Summarize key findings", Tone::Academic, false)
        .unwrap()
}

fn documents(names: &[&str]) -> Vec<Document> {
    names
        .iter()
        .map(|name| Document::new(*name, format!("text of {name}").into_bytes()))
        .collect()
}

fn service(llm: &Arc<RecordingLlmClient>) -> AnalysisService<TextFileLoader, RecordingLlmClient> {
    AnalysisService::new(Arc::new(TextFileLoader), Arc::clone(llm))
}

const VALID_REPLY: &str = r#"```json
{"extractedSections": [
  {"document": "a.pdf", "page": 1, "sectionTitle": "Findings", "importanceRank": 9, "content": "Main findings"},
  {"document": "c.pdf", "page": 4, "sectionTitle": "Limits", "importanceRank": 3, "content": "Caveats"}
]}
```"#;

#[tokio::test]
async fn given_documents_when_analyzing_then_sends_one_prompt_with_all_texts() {
    let llm = Arc::new(RecordingLlmClient::replying(VALID_REPLY));

    let sections = service(&llm)
        .analyze(documents(&["a.pdf", "b.pdf", "c.pdf"]), &params())
        .await
        .unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].section_title, "Findings");
    assert_eq!(llm.call_count(), 1);
    assert_eq!(*llm.schemas.lock().unwrap(), ["extracted_sections"]);
    let prompt = llm.last_prompt();
    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        assert!(prompt.contains(&format!("text of {name}")));
    }
    assert!(prompt.contains("[Page 1]"));
}

#[tokio::test]
async fn given_model_order_when_analyzing_then_preserves_it() {
    let reply = r#"{"extractedSections": [
      {"document": "a.pdf", "page": 1, "sectionTitle": "Low", "importanceRank": 2, "content": "x"},
      {"document": "b.pdf", "page": 1, "sectionTitle": "High", "importanceRank": 9, "content": "y"}
    ]}"#;
    let llm = Arc::new(RecordingLlmClient::replying(reply));

    let sections = service(&llm)
        .analyze(documents(&["a.pdf", "b.pdf", "c.pdf"]), &params())
        .await
        .unwrap();

    let titles: Vec<&str> = sections.iter().map(|s| s.section_title.as_str()).collect();
    assert_eq!(titles, ["Low", "High"]);
}

#[tokio::test]
async fn given_no_documents_when_analyzing_then_returns_validation_error() {
    let llm = Arc::new(RecordingLlmClient::replying(VALID_REPLY));

    let error = service(&llm).analyze(Vec::new(), &params()).await.unwrap_err();

    assert!(matches!(error, AnalysisError::Validation(_)));
    assert_eq!(error.user_message(), "At least one document is required.");
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_unreadable_document_when_analyzing_then_aborts_before_model_call() {
    let llm = Arc::new(RecordingLlmClient::replying(VALID_REPLY));

    let error = service(&llm)
        .analyze(documents(&["a.pdf", "broken.pdf", "c.pdf"]), &params())
        .await
        .unwrap_err();

    match &error {
        AnalysisError::DocumentParse { document, .. } => assert_eq!(document, "broken.pdf"),
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert_eq!(error.user_message(), "Failed to parse PDF document.");
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_model_failure_when_analyzing_then_hides_details_from_user() {
    let llm = Arc::new(RecordingLlmClient::failing("HTTP 500: upstream exploded"));

    let error = service(&llm)
        .analyze(documents(&["a.pdf", "b.pdf", "c.pdf"]), &params())
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::Model(_)));
    assert_eq!(
        error.user_message(),
        "An unexpected error occurred during analysis."
    );
}

#[tokio::test]
async fn given_non_json_reply_when_analyzing_then_returns_schema_error() {
    let llm = Arc::new(RecordingLlmClient::replying("I am unable to help with that."));

    let error = service(&llm)
        .analyze(documents(&["a.pdf", "b.pdf", "c.pdf"]), &params())
        .await
        .unwrap_err();

    assert!(matches!(error, AnalysisError::SchemaValidation(_)));
    assert_eq!(
        error.user_message(),
        "An unexpected error occurred during analysis."
    );
}
