use documiner::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed() {
    assert_eq!(sanitize_prompt("  What is on page 3?  "), "What is on page 3?");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");

    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_each() {
    let result = sanitize_prompt("token=first and token=second");

    assert_eq!(result, "token=[REDACTED] and token=[REDACTED]");
}

#[test]
fn given_azure_key_header_when_sanitizing_then_redacts_any_case() {
    let result = sanitize_prompt("API-KEY: abc123 and password=hunter2");

    assert_eq!(result, "API-KEY: [REDACTED] and password=[REDACTED]");
}
