pub mod llm;
pub mod observability;
pub mod report;
pub mod text_processing;
