use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::prompts::{
    AnalysisOutput, PromptDocument, SchemaViolation, analysis_output_schema, parse_structured,
    render_analysis_prompt,
};
use crate::domain::{AnalysisParameters, Document, ExtractedSection, ValidationErrors};

pub const DOCUMENT_PARSE_MESSAGE: &str = "Failed to parse PDF document.";
pub const UNEXPECTED_ANALYSIS_MESSAGE: &str = "An unexpected error occurred during analysis.";

/// Extracts every document, asks the model once for ranked sections and returns
/// them as the model ordered them.
pub struct AnalysisService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

impl<F, L> AnalysisService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    #[tracing::instrument(
        skip(self, documents, params),
        fields(
            document_count = documents.len(),
            tone = %params.tone,
            include_tags = params.include_contextual_tags,
        )
    )]
    pub async fn analyze(
        &self,
        documents: Vec<Document>,
        params: &AnalysisParameters,
    ) -> Result<Vec<ExtractedSection>, AnalysisError> {
        if documents.is_empty() {
            return Err(AnalysisError::Validation(ValidationErrors::single(
                "At least one document is required.",
            )));
        }

        let documents = self.extract_all(documents).await?;

        let prompt_documents: Vec<PromptDocument<'_>> = documents
            .iter()
            .map(|doc| PromptDocument {
                name: &doc.name,
                content: doc.text.as_deref().unwrap_or_default(),
            })
            .collect();
        let prompt = render_analysis_prompt(&prompt_documents, params);
        tracing::debug!(prompt_chars = prompt.len(), "Analysis prompt rendered");

        let raw = self
            .llm_client
            .complete_structured(&prompt, &analysis_output_schema())
            .await
            .map_err(AnalysisError::Model)?;

        let document_names: Vec<&str> = documents.iter().map(|doc| doc.name.as_str()).collect();
        let sections = parse_structured::<AnalysisOutput>(&raw)?
            .into_sections(&document_names, params.include_contextual_tags)?;

        if sections.is_empty() {
            tracing::warn!("Model returned no sections");
        }
        tracing::info!(section_count = sections.len(), "Document analysis complete");

        Ok(sections)
    }

    /// Runs extraction for all documents concurrently. The first failure aborts
    /// the batch.
    async fn extract_all(&self, documents: Vec<Document>) -> Result<Vec<Document>, AnalysisError> {
        try_join_all(documents.into_iter().map(|document| async move {
            match self.file_loader.extract_text(&document).await {
                Ok(text) => Ok(document.with_text(text)),
                Err(source) => Err(AnalysisError::DocumentParse {
                    document: document.name,
                    source,
                }),
            }
        }))
        .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid analysis request: {0}")]
    Validation(ValidationErrors),
    #[error("failed to parse {document}: {source}")]
    DocumentParse {
        document: String,
        #[source]
        source: FileLoaderError,
    },
    #[error("model request failed: {0}")]
    Model(LlmClientError),
    #[error("schema validation failed: {0}")]
    SchemaValidation(#[from] SchemaViolation),
}

impl AnalysisError {
    /// Text safe to show the user. Model and schema details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(errors) => errors.to_string(),
            AnalysisError::DocumentParse { .. } => DOCUMENT_PARSE_MESSAGE.to_string(),
            AnalysisError::Model(_) | AnalysisError::SchemaValidation(_) => {
                UNEXPECTED_ANALYSIS_MESSAGE.to_string()
            }
        }
    }
}
