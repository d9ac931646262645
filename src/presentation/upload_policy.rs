use bytes::Bytes;

use crate::domain::{Document, ValidationErrors};
use crate::presentation::config::UploadSettings;

const PDF_MIME: &str = "application/pdf";

/// A file part received from the analyze form, before it becomes a [`Document`].
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            content_type,
            data,
        }
    }

    fn looks_like_pdf(&self) -> bool {
        let by_extension = self.name.to_lowercase().ends_with(".pdf");
        let by_mime = self
            .content_type
            .as_deref()
            .is_some_and(|mime| mime.eq_ignore_ascii_case(PDF_MIME));
        by_extension || by_mime
    }

    pub fn into_document(self) -> Document {
        Document::new(self.name, self.data)
    }
}

/// File count, type and size limits for one analysis request. Checked before
/// any extraction or model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub min_documents: usize,
    pub max_documents: usize,
    pub max_file_size_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_settings(&UploadSettings::default())
    }
}

impl UploadPolicy {
    pub fn from_settings(settings: &UploadSettings) -> Self {
        Self {
            min_documents: settings.min_documents,
            max_documents: settings.max_documents,
            max_file_size_bytes: settings.max_file_size_bytes(),
        }
    }

    pub fn count_message(&self) -> String {
        format!(
            "Please upload between {} and {} PDF documents.",
            self.min_documents, self.max_documents
        )
    }

    pub fn validate(&self, files: &[UploadedFile]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if files.len() < self.min_documents || files.len() > self.max_documents {
            errors.push(self.count_message());
        }

        for file in files {
            if !file.looks_like_pdf() {
                errors.push(format!("{} is not a PDF document.", file.name));
            }
            if file.data.len() > self.max_file_size_bytes {
                errors.push(format!(
                    "{} exceeds the {} MB size limit.",
                    file.name,
                    self.max_file_size_bytes / (1024 * 1024)
                ));
            }
        }

        errors.into_result(())
    }
}
