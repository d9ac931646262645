use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::prompts::{
    RELATED_SECTION_LIMIT, RelatedContentOutput, SchemaViolation, parse_structured,
    related_content_output_schema, render_related_content_prompt,
};
use crate::domain::SectionReference;

pub const UNEXPECTED_RELATED_MESSAGE: &str =
    "An unexpected error occurred while finding related content.";

pub struct RelatedContentService<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
}

impl<L> RelatedContentService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Up to three sections from `pool` the model judges closest to `section`.
    ///
    /// Results are mapped back onto the pool entries; anything the model made up
    /// or echoed from the target is discarded.
    #[tracing::instrument(
        skip(self, section, pool),
        fields(section_title = %section.section_title, pool_size = pool.len())
    )]
    pub async fn find_related(
        &self,
        section: &SectionReference,
        pool: &[SectionReference],
    ) -> Result<Vec<SectionReference>, RelatedContentError> {
        let candidates: Vec<SectionReference> = pool
            .iter()
            .filter(|candidate| !candidate.same_section(section))
            .cloned()
            .collect();

        if candidates.is_empty() {
            tracing::debug!("No candidate sections besides the target");
            return Ok(Vec::new());
        }

        let prompt = render_related_content_prompt(section, &candidates);
        let raw = self
            .llm_client
            .complete_structured(&prompt, &related_content_output_schema())
            .await
            .map_err(RelatedContentError::Model)?;

        let suggested = parse_structured::<RelatedContentOutput>(&raw)?.into_references()?;

        let mut related: Vec<SectionReference> = Vec::with_capacity(RELATED_SECTION_LIMIT);
        for suggestion in suggested {
            if related.len() == RELATED_SECTION_LIMIT {
                break;
            }
            if suggestion.same_section(section) {
                tracing::debug!("Model echoed the target section");
                continue;
            }
            let Some(found) = match_candidate(&candidates, &suggestion, &related) else {
                tracing::warn!(
                    document = %suggestion.document,
                    page = suggestion.page,
                    "Model suggestion matches no unused candidate"
                );
                continue;
            };
            related.push(found.clone());
        }

        tracing::info!(related_count = related.len(), "Related content found");
        Ok(related)
    }
}

/// Prefers the candidate whose text matches the suggestion exactly, then the
/// first unused candidate at the same location, since the model may paraphrase.
fn match_candidate<'a>(
    candidates: &'a [SectionReference],
    suggestion: &SectionReference,
    already: &[SectionReference],
) -> Option<&'a SectionReference> {
    let unused = |c: &&SectionReference| !already.iter().any(|r| r.same_section(c));
    candidates
        .iter()
        .filter(unused)
        .find(|c| c.same_section(suggestion))
        .or_else(|| {
            candidates
                .iter()
                .filter(unused)
                .find(|c| c.same_location(suggestion))
        })
}

#[derive(Debug, thiserror::Error)]
pub enum RelatedContentError {
    #[error("model request failed: {0}")]
    Model(LlmClientError),
    #[error("schema validation failed: {0}")]
    SchemaValidation(#[from] SchemaViolation),
}

impl RelatedContentError {
    pub fn user_message(&self) -> String {
        UNEXPECTED_RELATED_MESSAGE.to_string()
    }
}
