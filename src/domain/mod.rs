mod analysis_parameters;
mod document;
mod extracted_section;
mod message;
mod message_role;
mod tone;
mod validation_errors;

pub use analysis_parameters::{AnalysisParameters, MIN_JOB_TO_BE_DONE_CHARS, MIN_PERSONA_CHARS};
pub use document::{Document, DocumentId};
pub use extracted_section::{
    ExtractedSection, HIGHLIGHT_RANK_THRESHOLD, MAX_IMPORTANCE_RANK, MIN_IMPORTANCE_RANK,
    SectionContext, SectionReference, sort_by_importance,
};
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use tone::Tone;
pub use validation_errors::ValidationErrors;
