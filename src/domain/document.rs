use bytes::Bytes;
use uuid::Uuid;

const PDF_SIGNATURE: &[u8] = b"%PDF-";
/// Readers accept junk before the header as long as it starts within this
/// many bytes.
const SIGNATURE_SEARCH_BYTES: usize = 1024;

/// An uploaded file for the lifetime of one analysis request.
///
/// `text` stays empty until the analysis orchestrator runs extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub data: Bytes,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            data: data.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn has_pdf_signature(&self) -> bool {
        let end = self
            .data
            .len()
            .min(SIGNATURE_SEARCH_BYTES + PDF_SIGNATURE.len());
        self.data[..end]
            .windows(PDF_SIGNATURE.len())
            .any(|window| window == PDF_SIGNATURE)
    }
}
