use crate::domain::ExtractedSection;

/// Turns a result set into a downloadable document.
pub trait ReportRenderer: Send + Sync {
    /// Renders `sections` by descending importance rank. Equal ranks keep the
    /// order given.
    fn render(&self, sections: &[ExtractedSection]) -> Result<Vec<u8>, ReportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("font unavailable: {0}")]
    Font(String),
    #[error("render failed: {0}")]
    Render(String),
}
