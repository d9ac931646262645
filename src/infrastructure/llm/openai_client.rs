use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, OutputSchema};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::{LlmProvider, LlmSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AZURE_API_VERSION: &str = "2024-08-01-preview";

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    provider: LlmProvider,
    completions_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    r#type: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    schema: &'a serde_json::Value,
    strict: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            LlmProvider::Azure => request.header("api-key", &self.api_key),
            LlmProvider::OpenAi | LlmProvider::LmStudio => {
                request.header("Authorization", format!("Bearer {}", self.api_key))
            }
        }
    }

    async fn send(&self, body: &ChatCompletionRequest<'_>) -> Result<String, LlmClientError> {
        let request = self.client.post(&self.completions_url).json(body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))?;

        tracing::debug!(reply = %sanitize_prompt(&content), "Model replied");
        Ok(content)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: None,
        };
        self.send(&body).await
    }

    #[tracing::instrument(skip(self, prompt, schema), fields(model = %self.model, schema = schema.name))]
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, LlmClientError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: Some(ResponseFormat {
                r#type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: schema.name,
                    schema: &schema.schema,
                    strict: false,
                },
            }),
        };
        self.send(&body).await
    }
}

pub fn create_llm_client(settings: &LlmSettings) -> Result<OpenAiClient, LlmClientError> {
    let completions_url = match settings.provider {
        LlmProvider::OpenAi => {
            let base = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
            format!("{}/chat/completions", base.trim_end_matches('/'))
        }
        LlmProvider::LmStudio => {
            let base = settings.base_url.as_deref().ok_or_else(|| {
                LlmClientError::Configuration("base_url required for lmstudio provider".to_string())
            })?;
            format!("{}/chat/completions", base.trim_end_matches('/'))
        }
        LlmProvider::Azure => {
            let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                LlmClientError::Configuration(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            let api_version = settings
                .azure_api_version
                .as_deref()
                .unwrap_or(DEFAULT_AZURE_API_VERSION);
            format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                settings.chat_model,
                api_version
            )
        }
    };

    if settings.provider != LlmProvider::LmStudio && settings.api_key.trim().is_empty() {
        return Err(LlmClientError::Configuration(format!(
            "api_key required for {} provider",
            settings.provider
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_seconds))
        .build()
        .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

    Ok(OpenAiClient {
        client,
        provider: settings.provider,
        completions_url,
        api_key: settings.api_key.clone(),
        model: settings.chat_model.clone(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    })
}
