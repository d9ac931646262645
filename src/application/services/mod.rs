mod analysis_service;
mod chat_service;
mod related_content_service;

pub use analysis_service::{
    AnalysisError, AnalysisService, DOCUMENT_PARSE_MESSAGE, UNEXPECTED_ANALYSIS_MESSAGE,
};
pub use chat_service::{ChatError, ChatService, EMPTY_REPLY_MESSAGE, UNEXPECTED_CHAT_MESSAGE};
pub use related_content_service::{
    RelatedContentError, RelatedContentService, UNEXPECTED_RELATED_MESSAGE,
};
