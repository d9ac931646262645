use std::sync::Mutex;

use documiner::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, OutputSchema,
};
use documiner::domain::Document;

/// Replies with a fixed text and records every prompt it receives.
pub struct RecordingLlmClient {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
    pub schemas: Mutex<Vec<&'static str>>,
}

impl RecordingLlmClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }

    fn respond(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.respond(prompt)
    }

    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, LlmClientError> {
        self.schemas.lock().unwrap().push(schema.name);
        self.respond(prompt)
    }
}

/// Treats the uploaded bytes as the page text; names starting with `broken`
/// fail like a corrupt PDF.
pub struct TextFileLoader;

#[async_trait::async_trait]
impl FileLoader for TextFileLoader {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        if document.name.starts_with("broken") {
            return Err(FileLoaderError::ExtractionFailed("bad xref table".to_string()));
        }
        Ok(format!("[Page 1]\n{}", String::from_utf8_lossy(&document.data)))
    }
}
