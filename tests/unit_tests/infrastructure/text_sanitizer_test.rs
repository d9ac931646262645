use documiner::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_joins_word() {
    assert_eq!(sanitize_extracted_text("infor-\nmation"), "information");
}

#[test]
fn given_many_blank_lines_when_sanitizing_then_keeps_one_paragraph_break() {
    assert_eq!(
        sanitize_extracted_text("first\n\n\n\nsecond"),
        "first\n\nsecond"
    );
}

#[test]
fn given_runs_of_spaces_when_sanitizing_then_collapses_them() {
    assert_eq!(sanitize_extracted_text("  a   b\t\tc  "), "a b c");
}

#[test]
fn given_ligature_when_sanitizing_then_normalizes_it() {
    assert_eq!(sanitize_extracted_text("\u{FB01}nance"), "finance");
}

#[test]
fn given_control_characters_when_sanitizing_then_strips_them() {
    assert_eq!(sanitize_extracted_text("a\u{0000}b\u{000C}c"), "abc");
}

#[test]
fn given_only_whitespace_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(" \n\t\n "), "");
}
