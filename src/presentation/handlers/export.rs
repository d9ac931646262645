use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::ExtractedSection;
use crate::presentation::state::AppState;

use super::responses::{ApiResponse, INVALID_REQUEST_MESSAGE};

pub const EXPORT_FILENAME: &str = "documiner-analysis.pdf";
pub const NOTHING_TO_EXPORT_MESSAGE: &str = "There are no analysis results to export.";
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate the PDF report.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub extracted_sections: Vec<ExtractedSection>,
}

#[tracing::instrument(skip(state, request))]
pub async fn export_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Result<Json<ExportRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed export request");
            return ApiResponse::<()>::failure(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
        }
    };
    tracing::debug!(section_count = request.extracted_sections.len(), "Rendering report");

    if request.extracted_sections.is_empty() {
        return ApiResponse::<()>::failure(StatusCode::BAD_REQUEST, NOTHING_TO_EXPORT_MESSAGE);
    }

    let renderer = std::sync::Arc::clone(&state.report_renderer);
    let rendered = tokio::task::spawn_blocking(move || {
        renderer.render(&request.extracted_sections)
    })
    .await;

    match rendered {
        Ok(Ok(pdf)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILENAME}\""),
                ),
            ],
            pdf,
        )
            .into_response(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Report rendering failed");
            ApiResponse::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, EXPORT_FAILED_MESSAGE)
        }
        Err(e) => {
            tracing::error!(error = %e, "Report task failed");
            ApiResponse::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, EXPORT_FAILED_MESSAGE)
        }
    }
}
