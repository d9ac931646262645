use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("not a PDF document: {0}")]
    NotAPdf(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
