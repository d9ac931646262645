mod pdf_report_renderer;
pub mod table_layout;

pub use pdf_report_renderer::{PdfReportRenderer, REPORT_TITLE};
