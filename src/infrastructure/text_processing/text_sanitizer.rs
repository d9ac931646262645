use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SPLIT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\n[ \t]*(?P<tail>\w)").expect("static regex")
});

/// Cleans one page of extracted PDF text for the model prompt.
///
/// Text is NFKC-normalized (ligatures become plain letters) and stripped of
/// control characters. Words hyphenated across a line break are rejoined.
/// Lines keep their breaks with inner whitespace collapsed, and paragraphs
/// are separated by exactly one blank line.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let printable: String = raw
        .nfkc()
        .filter(|ch| !ch.is_control() || matches!(ch, '\n' | '\t'))
        .collect();
    let rejoined = SPLIT_WORD.replace_all(&printable, "$head$tail");

    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in rejoined.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        if !words.is_empty() {
            current.push(words.join(" "));
        } else if !current.is_empty() {
            paragraphs.push(current.join("\n"));
            current.clear();
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
