use documiner::application::prompts::{AnalysisOutput, extract_json_block, parse_structured};

#[test]
fn given_plain_json_when_extracting_then_returns_it() {
    assert_eq!(extract_json_block(r#"{"a": 1}"#).unwrap(), r#"{"a": 1}"#);
}

#[test]
fn given_json_code_fence_when_extracting_then_returns_inner_block() {
    let response = "Here you go:\n```json\n{\"a\": 1}\n```\nAnything else?";

    assert_eq!(extract_json_block(response).unwrap(), "{\"a\": 1}");
}

#[test]
fn given_bare_code_fence_when_extracting_then_returns_inner_block() {
    let response = "```\n{\"a\": 1}\n```";

    assert_eq!(extract_json_block(response).unwrap(), "{\"a\": 1}");
}

#[test]
fn given_prose_around_object_when_extracting_then_returns_object() {
    let response = "Sure! {\"a\": {\"b\": 2}} Hope that helps.";

    assert_eq!(extract_json_block(response).unwrap(), "{\"a\": {\"b\": 2}}");
}

#[test]
fn given_no_object_when_extracting_then_fails() {
    assert!(extract_json_block("I could not find anything.").is_err());
}

#[test]
fn given_missing_required_field_when_parsing_then_reports_schema_mismatch() {
    let response = r#"{"extractedSections": [{"document": "a.pdf", "page": 1, "importanceRank": 3, "content": "x"}]}"#;

    let error = parse_structured::<AnalysisOutput>(response).unwrap_err();

    assert!(error.0.contains("sectionTitle"));
}

#[test]
fn given_wrong_top_level_key_when_parsing_then_fails() {
    assert!(parse_structured::<AnalysisOutput>(r#"{"sections": []}"#).is_err());
}
