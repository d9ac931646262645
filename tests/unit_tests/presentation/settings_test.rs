use documiner::presentation::config::{LlmProvider, Settings};

#[test]
fn given_no_overrides_when_loading_defaults_then_matches_documented_values() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.provider, LlmProvider::OpenAi);
    assert_eq!(settings.upload.min_documents, 3);
    assert_eq!(settings.upload.max_documents, 10);
    assert_eq!(settings.upload.max_file_size_bytes(), 10 * 1024 * 1024);
    assert_eq!(settings.extraction.timeout_seconds, 30);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_provider_when_displayed_then_uses_config_name() {
    assert_eq!(LlmProvider::LmStudio.to_string(), "lmstudio");
    assert_eq!(LlmProvider::Azure.to_string(), "azure");
}
