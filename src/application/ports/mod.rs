mod file_loader;
mod llm_client;
mod output_schema;
mod report_renderer;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use output_schema::OutputSchema;
pub use report_renderer::{ReportError, ReportRenderer};
