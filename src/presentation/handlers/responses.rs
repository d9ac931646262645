use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Returned when a JSON body is missing fields or has the wrong shape.
pub const INVALID_REQUEST_MESSAGE: &str =
    "The request body is missing required fields or is malformed.";
/// Returned when the analysis request is not a readable multipart form.
pub const INVALID_UPLOAD_MESSAGE: &str = "Documents must be uploaded as a multipart form.";

/// `{data, error}` envelope; exactly one side is non-null.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                data: None,
                error: Some(message.into()),
            }),
        )
            .into_response()
    }
}

/// Chat replies use `response` where the other routes use `data`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: Option<String>,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn ok(text: String) -> Response {
        (
            StatusCode::OK,
            Json(Self {
                response: Some(text),
                error: None,
            }),
        )
            .into_response()
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                response: None,
                error: Some(message.into()),
            }),
        )
            .into_response()
    }
}
