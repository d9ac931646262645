//! Prompt templates for the three model calls, together with the response
//! shapes they declare and the checks applied to what comes back.

mod analysis;
mod chat;
mod related_content;
mod structured_output;

pub use analysis::{
    ANALYSIS_SCHEMA_NAME, AnalysisOutput, ExtractedSectionOutput, PromptDocument,
    analysis_output_schema, render_analysis_prompt,
};
pub use chat::{citation_for, render_chat_prompt};
pub use related_content::{
    RELATED_CONTENT_SCHEMA_NAME, RELATED_SECTION_LIMIT, RelatedContentOutput,
    RelatedSectionOutput, related_content_output_schema, render_related_content_prompt,
};
pub use structured_output::{SchemaViolation, extract_json_block, parse_structured};
