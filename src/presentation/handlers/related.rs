use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::SectionReference;
use crate::presentation::state::AppState;

use super::responses::{ApiResponse, INVALID_REQUEST_MESSAGE};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRequest {
    pub section: SectionReference,
    #[serde(default)]
    pub all_sections: Vec<SectionReference>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPayload {
    pub related_content: Vec<SectionReference>,
}

#[tracing::instrument(skip(state, request))]
pub async fn related_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Result<Json<RelatedRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed related-content request");
            return ApiResponse::<RelatedPayload>::failure(
                StatusCode::BAD_REQUEST,
                INVALID_REQUEST_MESSAGE,
            );
        }
    };

    match state
        .related_content_service
        .find_related(&request.section, &request.all_sections)
        .await
    {
        Ok(related_content) => ApiResponse::ok(RelatedPayload { related_content }),
        Err(e) => {
            tracing::error!(error = %e, "Related content lookup failed");
            ApiResponse::<RelatedPayload>::failure(StatusCode::BAD_GATEWAY, e.user_message())
        }
    }
}
