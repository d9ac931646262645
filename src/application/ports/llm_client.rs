use async_trait::async_trait;

use super::OutputSchema;

/// Single-shot access to a hosted chat model. Implementations keep no
/// conversation state between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Free-text completion for one user prompt.
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;

    /// Completion constrained to `schema`. Returns the raw model text; callers
    /// still validate it.
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
