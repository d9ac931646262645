use std::ops::Range;

use crate::domain::{ExtractedSection, sort_by_importance};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
pub const TITLE_BLOCK_MM: f32 = 16.0;
pub const CELL_PADDING_MM: f32 = 1.5;
pub const BODY_FONT_SIZE: f32 = 8.0;
pub const LINE_HEIGHT_MM: f32 = 3.8;

const PT_TO_MM: f32 = 0.3528;
/// Glyphs outside printable ASCII are measured as a wide capital.
const FALLBACK_GLYPH_EM: f32 = 0.722;

/// Helvetica advance widths for `' '..='~'` in thousandths of an em, from the
/// standard Adobe font metrics. The oblique face shares them.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

pub fn glyph_width_em(ch: char) -> f32 {
    match ch {
        ' '..='~' => f32::from(HELVETICA_WIDTHS[ch as usize - 0x20]) / 1000.0,
        _ => FALLBACK_GLYPH_EM,
    }
}

/// Printed width of `text` in regular or oblique Helvetica.
pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().map(glyph_width_em).sum::<f32>() * font_size * PT_TO_MM
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    pub width_mm: f32,
}

const FIXED_COLUMNS: [Column; 4] = [
    Column {
        header: "Title",
        width_mm: 40.0,
    },
    Column {
        header: "Document",
        width_mm: 30.0,
    },
    Column {
        header: "Page",
        width_mm: 15.0,
    },
    Column {
        header: "Rank",
        width_mm: 15.0,
    },
];

pub const CONTENT_COLUMN: usize = 4;

impl Column {
    /// Width left for text once both paddings are taken off.
    pub fn usable_width_mm(&self) -> f32 {
        (self.width_mm - 2.0 * CELL_PADDING_MM).max(0.0)
    }
}

/// Title, Document, Page and Rank have fixed widths; Content takes the rest of
/// the printable width.
pub fn columns() -> [Column; 5] {
    let fixed: f32 = FIXED_COLUMNS.iter().map(|c| c.width_mm).sum();
    let content = Column {
        header: "Content",
        width_mm: PAGE_WIDTH_MM - 2.0 * MARGIN_MM - fixed,
    };
    [
        FIXED_COLUMNS[0],
        FIXED_COLUMNS[1],
        FIXED_COLUMNS[2],
        FIXED_COLUMNS[3],
        content,
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: [Vec<String>; 5],
}

impl TableRow {
    pub fn height_mm(&self) -> f32 {
        let lines = self.cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        lines as f32 * LINE_HEIGHT_MM + 2.0 * CELL_PADDING_MM
    }
}

/// Greedy word wrap by measured glyph width. Words wider than a line are
/// broken between glyphs; a line always holds at least one glyph.
pub fn wrap_text(text: &str, max_width_mm: f32, font_size: f32) -> Vec<String> {
    let max_em = max_width_mm / (font_size * PT_TO_MM);
    let space_em = glyph_width_em(' ');
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_em = 0.0;

        for word in paragraph.split_whitespace() {
            let word_em: f32 = word.chars().map(glyph_width_em).sum();
            let gap = if current.is_empty() { 0.0 } else { space_em };

            if current_em + gap + word_em <= max_em {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_em += gap + word_em;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_em = 0.0;
            }
            if word_em <= max_em {
                current.push_str(word);
                current_em = word_em;
                continue;
            }

            for ch in word.chars() {
                let glyph = glyph_width_em(ch);
                if !current.is_empty() && current_em + glyph > max_em {
                    lines.push(std::mem::take(&mut current));
                    current_em = 0.0;
                }
                current.push(ch);
                current_em += glyph;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Builds the report rows in display order (descending rank, ties keep their
/// incoming order).
pub fn layout_rows(sections: &[ExtractedSection]) -> Vec<TableRow> {
    let mut ordered = sections.to_vec();
    sort_by_importance(&mut ordered);

    let widths = columns().map(|c| c.usable_width_mm());

    ordered
        .iter()
        .flat_map(|section| {
            let values = [
                section.section_title.clone(),
                section.document.clone(),
                section.page.to_string(),
                section.importance_rank.to_string(),
                section.content.clone(),
            ];
            let cells =
                std::array::from_fn(|i| wrap_text(&values[i], widths[i], BODY_FONT_SIZE));
            split_tall_row(TableRow { cells }, max_lines_per_row())
        })
        .collect()
}

fn max_lines_per_row() -> usize {
    let usable = PAGE_HEIGHT_MM
        - 2.0 * MARGIN_MM
        - header_height_mm()
        - TITLE_BLOCK_MM
        - 2.0 * CELL_PADDING_MM;
    ((usable / LINE_HEIGHT_MM).floor() as usize).max(1)
}

/// Rows that cannot fit on one page continue in follow-up rows with the same
/// cells cut into line chunks.
fn split_tall_row(row: TableRow, max_lines: usize) -> Vec<TableRow> {
    let total = row.cells.iter().map(Vec::len).max().unwrap_or(1);
    if total <= max_lines {
        return vec![row];
    }

    (0..total)
        .step_by(max_lines)
        .map(|start| TableRow {
            cells: std::array::from_fn(|i| {
                row.cells[i]
                    .iter()
                    .skip(start)
                    .take(max_lines)
                    .cloned()
                    .collect()
            }),
        })
        .collect()
}

pub fn header_height_mm() -> f32 {
    LINE_HEIGHT_MM + 2.0 * CELL_PADDING_MM
}

/// Splits rows into pages. The first page loses the title block; every page
/// repeats the header row. A row taller than a whole page gets a page to itself.
pub fn paginate(rows: &[TableRow]) -> Vec<Range<usize>> {
    let body_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - header_height_mm();
    let mut available = body_height - TITLE_BLOCK_MM;
    let mut pages = Vec::new();
    let mut start = 0;
    let mut used = 0.0;

    for (index, row) in rows.iter().enumerate() {
        let height = row.height_mm();
        if used + height > available && index > start {
            pages.push(start..index);
            start = index;
            used = 0.0;
            available = body_height;
        }
        used += height;
    }

    pages.push(start..rows.len());
    pages
}
