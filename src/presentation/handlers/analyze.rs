use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AnalysisError;
use crate::domain::{AnalysisParameters, ExtractedSection};
use crate::presentation::state::AppState;
use crate::presentation::upload_policy::UploadedFile;

use super::responses::{ApiResponse, INVALID_UPLOAD_MESSAGE};

#[derive(Debug, Serialize)]
pub struct AnalysisPayload {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub extracted_sections: Vec<ExtractedSection>,
}

#[derive(Debug, Default)]
struct AnalysisForm {
    persona: String,
    job_to_be_done: String,
    tone: String,
    include_contextual_tags: bool,
    files: Vec<UploadedFile>,
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

async fn read_form(multipart: &mut Multipart) -> Result<AnalysisForm, String> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read upload: {e}"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "documents" => {
                let filename = field.file_name().unwrap_or("unknown.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read {filename}: {e}"))?;
                tracing::debug!(filename = %filename, bytes = data.len(), "File part received");
                form.files
                    .push(UploadedFile::new(filename, content_type, data));
            }
            "persona" | "jobToBeDone" | "tone" | "includeContextualTags" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read field {name}: {e}"))?;
                match name.as_str() {
                    "persona" => form.persona = value,
                    "jobToBeDone" => form.job_to_be_done = value,
                    "tone" => form.tone = value,
                    _ => form.include_contextual_tags = parse_flag(&value),
                }
            }
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

fn error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::Validation(_) => StatusCode::BAD_REQUEST,
        AnalysisError::DocumentParse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AnalysisError::Model(_) | AnalysisError::SchemaValidation(_) => StatusCode::BAD_GATEWAY,
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(
                error = %rejection.body_text(),
                "Analysis request is not a multipart form"
            );
            return ApiResponse::<AnalysisPayload>::failure(
                StatusCode::BAD_REQUEST,
                INVALID_UPLOAD_MESSAGE,
            );
        }
    };

    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(message) => {
            tracing::warn!(error = %message, "Malformed analysis upload");
            return ApiResponse::<AnalysisPayload>::failure(StatusCode::BAD_REQUEST, message);
        }
    };

    if let Err(errors) = state.upload_policy.validate(&form.files) {
        tracing::warn!(
            file_count = form.files.len(),
            error = %errors,
            "Upload rejected"
        );
        return ApiResponse::<AnalysisPayload>::failure(StatusCode::BAD_REQUEST, errors.to_string());
    }

    let params = match AnalysisParameters::parse(
        &form.persona,
        &form.job_to_be_done,
        &form.tone,
        form.include_contextual_tags,
    ) {
        Ok(params) => params,
        Err(errors) => {
            tracing::warn!(error = %errors, "Analysis parameters rejected");
            return ApiResponse::<AnalysisPayload>::failure(
                StatusCode::BAD_REQUEST,
                errors.to_string(),
            );
        }
    };

    let documents = form
        .files
        .into_iter()
        .map(UploadedFile::into_document)
        .collect();

    match state.analysis_service.analyze(documents, &params).await {
        Ok(extracted_sections) => {
            tracing::info!(
                section_count = extracted_sections.len(),
                "Analysis successful"
            );
            ApiResponse::ok(AnalysisPayload {
                analysis: AnalysisResult { extracted_sections },
            })
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            ApiResponse::<AnalysisPayload>::failure(error_status(&e), e.user_message())
        }
    }
}
