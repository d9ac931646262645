use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::prompts::render_chat_prompt;
use crate::domain::{ChatMessage, SectionContext, ValidationErrors};

pub const EMPTY_REPLY_MESSAGE: &str = "Failed to get a response from the AI.";
pub const UNEXPECTED_CHAT_MESSAGE: &str = "An unexpected error occurred during chat.";

/// Answers questions about a single section. Every call stands alone; earlier
/// turns are never sent back to the model.
pub struct ChatService<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
}

impl<L> ChatService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, question, section), fields(section_title = %section.section_title))]
    pub async fn ask(
        &self,
        question: &str,
        section: &SectionContext,
    ) -> Result<ChatMessage, ChatError> {
        let question = question.trim();

        let mut errors = ValidationErrors::new();
        if question.is_empty() {
            errors.push("Question is required.");
        }
        if section.content.trim().is_empty() {
            errors.push("Section content is required.");
        }
        if !errors.is_empty() {
            return Err(ChatError::Validation(errors));
        }

        let prompt = render_chat_prompt(question, section);
        let reply = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(ChatError::Model)?;

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(ChatError::EmptyReply);
        }

        Ok(ChatMessage::assistant(reply))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid chat request: {0}")]
    Validation(ValidationErrors),
    #[error("model request failed: {0}")]
    Model(LlmClientError),
    #[error("model returned an empty reply")]
    EmptyReply,
}

impl ChatError {
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Validation(errors) => errors.to_string(),
            ChatError::EmptyReply => EMPTY_REPLY_MESSAGE.to_string(),
            ChatError::Model(_) => UNEXPECTED_CHAT_MESSAGE.to_string(),
        }
    }
}
