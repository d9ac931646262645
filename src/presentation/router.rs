use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, chat_handler, export_handler, health_handler, index_handler, related_handler,
};
use crate::presentation::state::AppState;

/// Multipart framing and the text fields on top of the file parts.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let policy = state.upload_policy;
    let body_limit = policy.max_documents * policy.max_file_size_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route(
            "/api/v1/analyze",
            post(analyze_handler::<F, L>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/v1/chat", post(chat_handler::<F, L>))
        .route("/api/v1/related", post(related_handler::<F, L>))
        .route("/api/v1/export", post(export_handler::<F, L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
