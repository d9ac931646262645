use std::sync::LazyLock;

use regex::Regex;

const LOG_PREVIEW_CHARS: usize = 100;

static CREDENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer\s+|api[-_]key\s*[:=]\s*|password=|secret=|token=)[^\s&"']+"#)
        .expect("static regex")
});

/// Log-safe preview of prompt, question or reply text: at most 100 characters,
/// with credential-looking values masked.
pub fn sanitize_prompt(prompt: &str) -> String {
    let text = prompt.trim();
    if text.is_empty() {
        return "[EMPTY]".to_string();
    }

    let preview = match text.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &text[..cut], text.chars().count()),
        None => text.to_string(),
    };

    CREDENTIAL
        .replace_all(&preview, "${1}[REDACTED]")
        .into_owned()
}
