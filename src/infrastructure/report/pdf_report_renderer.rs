use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};

use crate::application::ports::{ReportError, ReportRenderer};
use crate::domain::ExtractedSection;

use super::table_layout::{
    BODY_FONT_SIZE, CELL_PADDING_MM, CONTENT_COLUMN, Column, LINE_HEIGHT_MM, MARGIN_MM,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TITLE_BLOCK_MM, TableRow, columns, header_height_mm,
    layout_rows, paginate,
};

pub const REPORT_TITLE: &str = "DocuMiner AI - Analysis Results";
const TITLE_FONT_SIZE: f32 = 14.0;
const HEADER_FILL: (u8, u8, u8) = (22, 163, 74);
const GRID_GREY: f32 = 0.75;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Renders the analysis table to an A4 PDF with `printpdf` builtin fonts.
#[derive(Debug, Default, Clone)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn load_fonts(doc: &PdfDocumentReference) -> Result<Fonts, ReportError> {
        let font = |builtin| {
            doc.add_builtin_font(builtin)
                .map_err(|e| ReportError::Font(e.to_string()))
        };
        Ok(Fonts {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            italic: font(BuiltinFont::HelveticaOblique)?,
        })
    }
}

impl ReportRenderer for PdfReportRenderer {
    #[tracing::instrument(skip(self, sections), fields(section_count = sections.len()))]
    fn render(&self, sections: &[ExtractedSection]) -> Result<Vec<u8>, ReportError> {
        let rows = layout_rows(sections);
        let pages = paginate(&rows);
        let table = columns();

        let (doc, first_page, first_layer) = PdfDocument::new(
            REPORT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let fonts = Self::load_fonts(&doc)?;

        for (page_number, range) in pages.iter().enumerate() {
            let layer = if page_number == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Layer {}", page_number + 1),
                );
                doc.get_page(page).get_layer(layer)
            };

            let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
            if page_number == 0 {
                set_fill(&layer, (0, 0, 0));
                layer.use_text(
                    REPORT_TITLE,
                    TITLE_FONT_SIZE,
                    Mm(MARGIN_MM),
                    Mm(y - 6.0),
                    &fonts.bold,
                );
                y -= TITLE_BLOCK_MM;
            }

            y = draw_header(&layer, &table, y, &fonts);
            for row in &rows[range.clone()] {
                y = draw_row(&layer, &table, row, y, &fonts);
            }
        }

        tracing::info!(
            rows = rows.len(),
            pages = pages.len(),
            "Analysis report rendered"
        );

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| ReportError::Render(format!("PDF save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| ReportError::Render(format!("PDF buffer error: {e}")))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn set_fill(layer: &PdfLayerReference, colour: (u8, u8, u8)) {
    layer.set_fill_color(rgb(colour));
}

fn cell_rect(x: f32, top: f32, width: f32, height: f32) -> Rect {
    Rect::new(Mm(x), Mm(top - height), Mm(x + width), Mm(top))
}

fn draw_header(layer: &PdfLayerReference, table: &[Column; 5], top: f32, fonts: &Fonts) -> f32 {
    let height = header_height_mm();
    let mut x = MARGIN_MM;

    set_fill(layer, HEADER_FILL);
    let total_width: f32 = table.iter().map(|c| c.width_mm).sum();
    layer.add_rect(cell_rect(x, top, total_width, height).with_mode(PaintMode::Fill));

    set_fill(layer, (255, 255, 255));
    for column in table {
        layer.use_text(
            column.header,
            BODY_FONT_SIZE,
            Mm(x + CELL_PADDING_MM),
            Mm(top - CELL_PADDING_MM - LINE_HEIGHT_MM + 1.0),
            &fonts.bold,
        );
        x += column.width_mm;
    }

    top - height
}

fn draw_row(
    layer: &PdfLayerReference,
    table: &[Column; 5],
    row: &TableRow,
    top: f32,
    fonts: &Fonts,
) -> f32 {
    let height = row.height_mm();
    let mut x = MARGIN_MM;

    layer.set_outline_color(Color::Rgb(Rgb::new(GRID_GREY, GRID_GREY, GRID_GREY, None)));
    layer.set_outline_thickness(0.3);
    set_fill(layer, (0, 0, 0));

    for (index, (column, lines)) in table.iter().zip(row.cells.iter()).enumerate() {
        layer.add_rect(cell_rect(x, top, column.width_mm, height).with_mode(PaintMode::Stroke));

        let font = if index == CONTENT_COLUMN {
            &fonts.italic
        } else {
            &fonts.regular
        };
        let mut baseline = top - CELL_PADDING_MM - LINE_HEIGHT_MM + 1.0;
        for line in lines {
            layer.use_text(
                line.as_str(),
                BODY_FONT_SIZE,
                Mm(x + CELL_PADDING_MM),
                Mm(baseline),
                font,
            );
            baseline -= LINE_HEIGHT_MM;
        }
        x += column.width_mm;
    }

    top - height
}
