mod analyze;
mod chat;
mod export;
mod health;
mod index;
mod related;
pub mod responses;

pub use analyze::{AnalysisPayload, AnalysisResult, analyze_handler};
pub use chat::{ChatRequest, chat_handler};
pub use export::{
    EXPORT_FAILED_MESSAGE, EXPORT_FILENAME, ExportRequest, NOTHING_TO_EXPORT_MESSAGE,
    export_handler,
};
pub use health::health_handler;
pub use index::index_handler;
pub use related::{RelatedPayload, RelatedRequest, related_handler};
pub use responses::{INVALID_REQUEST_MESSAGE, INVALID_UPLOAD_MESSAGE};
