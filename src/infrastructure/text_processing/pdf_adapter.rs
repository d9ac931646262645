use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

use super::text_sanitizer::sanitize_extracted_text;

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text extraction backed by `pdf-extract`.
///
/// Output pages are labelled `[Page N]` (1-based) so page numbers survive into
/// the model prompt.
#[derive(Debug, Clone)]
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    /// Bounds how long a request waits for extraction. `pdf-extract` cannot be
    /// interrupted, so on timeout the blocking task is detached and runs to
    /// completion on the blocking pool; only its result is discarded.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

pub fn label_pages(pages: Vec<String>) -> Vec<String> {
    pages
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = sanitize_extracted_text(&raw);
            (!text.is_empty()).then(|| format!("[Page {}]\n{}", index + 1, text))
        })
        .collect()
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.name,
            size_bytes = document.size_bytes(),
        )
    )]
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        if !document.has_pdf_signature() {
            return Err(FileLoaderError::NotAPdf(document.name.clone()));
        }

        let data = document.data.clone();
        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| {
            tracing::warn!(
                timeout_secs = self.timeout.as_secs(),
                "PDF extraction timed out; blocking task left to finish detached"
            );
            FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string())
        })?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("extraction task failed: {e}")))??;

        let page_count = pages.len();
        let labelled = label_pages(pages);
        tracing::info!(
            page_count,
            text_pages = labelled.len(),
            "PDF text extraction complete"
        );

        if labelled.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.name.clone()));
        }

        Ok(labelled.join("\n\n"))
    }
}
