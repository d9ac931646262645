use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::ChatError;
use crate::domain::SectionContext;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::responses::{ChatResponse, INVALID_REQUEST_MESSAGE};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
    pub section: SectionContext,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed chat request");
            return ChatResponse::failure(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
        }
    };

    tracing::debug!(
        question = %sanitize_prompt(&request.question),
        section_title = %request.section.section_title,
        "Processing chat question"
    );

    match state
        .chat_service
        .ask(&request.question, &request.section)
        .await
    {
        Ok(message) => ChatResponse::ok(message.text),
        Err(e) => {
            tracing::error!(error = %e, "Chat failed");
            let status = match e {
                ChatError::Validation(_) => StatusCode::BAD_REQUEST,
                ChatError::Model(_) | ChatError::EmptyReply => StatusCode::BAD_GATEWAY,
            };
            ChatResponse::failure(status, e.user_message())
        }
    }
}
