use documiner::domain::ExtractedSection;
use documiner::infrastructure::report::table_layout::{
    BODY_FONT_SIZE, CONTENT_COLUMN, MARGIN_MM, PAGE_WIDTH_MM, columns, layout_rows, paginate,
    text_width_mm, wrap_text,
};

const WIDTH_TOLERANCE_MM: f32 = 0.01;

fn section(title: &str, rank: u8, content: &str) -> ExtractedSection {
    ExtractedSection {
        document: "a.pdf".to_string(),
        page: 2,
        section_title: title.to_string(),
        importance_rank: rank,
        content: content.to_string(),
        tags: None,
    }
}

#[test]
fn given_table_when_listing_columns_then_uses_fixed_widths_and_fills_rest() {
    let table = columns();
    let headers: Vec<&str> = table.iter().map(|c| c.header).collect();

    assert_eq!(headers, ["Title", "Document", "Page", "Rank", "Content"]);
    assert_eq!(table[0].width_mm, 40.0);
    assert_eq!(table[1].width_mm, 30.0);
    let total: f32 = table.iter().map(|c| c.width_mm).sum();
    assert!((total - (PAGE_WIDTH_MM - 2.0 * MARGIN_MM)).abs() < 0.01);
}

#[test]
fn given_long_text_when_wrapping_then_no_line_exceeds_width() {
    let max = text_width_mm("the quick", BODY_FONT_SIZE) + 0.1;

    let lines = wrap_text("the quick brown fox jumps over the lazy dog", max, BODY_FONT_SIZE);

    assert!(lines.len() > 1);
    assert!(
        lines
            .iter()
            .all(|l| text_width_mm(l, BODY_FONT_SIZE) <= max + WIDTH_TOLERANCE_MM)
    );
    assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
}

#[test]
fn given_overlong_word_when_wrapping_then_splits_between_glyphs() {
    let max = text_width_mm("WWWW", BODY_FONT_SIZE) + 0.1;

    let lines = wrap_text("WWWWWWWWWW", max, BODY_FONT_SIZE);

    assert_eq!(lines, ["WWWW", "WWWW", "WW"]);
}

#[test]
fn given_capitals_when_measuring_then_wider_than_lowercase() {
    let upper = text_width_mm("MANAGEMENT", BODY_FONT_SIZE);
    let lower = text_width_mm("management", BODY_FONT_SIZE);

    assert!(upper > lower * 1.2);
}

#[test]
fn given_empty_text_when_wrapping_then_returns_single_empty_line() {
    assert_eq!(wrap_text("", 10.0, BODY_FONT_SIZE), [""]);
}

#[test]
fn given_all_caps_title_and_document_when_laying_out_then_cells_stay_inside_columns() {
    let mut wide = section(
        "QUARTERLY WORKFORCE MANAGEMENT OVERVIEW AND WAGE COMPARISON",
        8,
        "x",
    );
    wide.document = "WAREHOUSE_MAINTENANCE_MANUAL_2024.PDF".to_string();
    let table = columns();

    let rows = layout_rows(&[wide]);

    assert!(rows[0].cells[0].len() > 1);
    assert!(rows[0].cells[1].len() > 1);
    for (column, lines) in table.iter().zip(rows[0].cells.iter()) {
        for line in lines {
            let width = text_width_mm(line, BODY_FONT_SIZE);
            assert!(
                width <= column.usable_width_mm() + WIDTH_TOLERANCE_MM,
                "{line:?} overflows {}",
                column.header
            );
        }
    }
}

#[test]
fn given_sections_when_laying_out_then_rows_follow_descending_rank() {
    let rows = layout_rows(&[
        section("low", 2, "x"),
        section("high", 9, "y"),
        section("mid", 5, "z"),
    ]);

    let titles: Vec<&str> = rows.iter().map(|r| r.cells[0][0].as_str()).collect();
    assert_eq!(titles, ["high", "mid", "low"]);
    assert_eq!(rows[0].cells[2], ["2"]);
    assert_eq!(rows[0].cells[3], ["9"]);
}

#[test]
fn given_equal_ranks_when_laying_out_then_rows_keep_screen_order() {
    let rows = layout_rows(&[
        section("first-seven", 7, "x"),
        section("top", 9, "x"),
        section("second-seven", 7, "x"),
        section("low", 3, "x"),
        section("third-seven", 7, "x"),
    ]);

    let titles: Vec<&str> = rows.iter().map(|r| r.cells[0][0].as_str()).collect();
    assert_eq!(
        titles,
        ["top", "first-seven", "second-seven", "third-seven", "low"]
    );
}

#[test]
fn given_few_rows_when_paginating_then_fits_on_one_page() {
    let rows = layout_rows(&[section("a", 5, "short"), section("b", 4, "short")]);

    assert_eq!(paginate(&rows), [0..2]);
}

#[test]
fn given_many_rows_when_paginating_then_covers_every_row_in_order() {
    let content = "lorem ipsum dolor sit amet ".repeat(20);
    let sections: Vec<ExtractedSection> =
        (0..40).map(|i| section(&format!("s{i}"), 5, &content)).collect();
    let rows = layout_rows(&sections);

    let pages = paginate(&rows);

    assert!(pages.len() > 1);
    assert_eq!(pages.first().unwrap().start, 0);
    assert_eq!(pages.last().unwrap().end, rows.len());
    for pair in pages.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn given_huge_content_when_laying_out_then_splits_row_across_pages() {
    let content = "word ".repeat(5000);

    let rows = layout_rows(&[section("giant", 5, &content)]);

    assert!(rows.len() > 1);
    assert_eq!(rows[0].cells[0], ["giant"]);
    assert!(!rows[1].cells[CONTENT_COLUMN].is_empty());
}
