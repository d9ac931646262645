use serde::{Deserialize, Serialize};

pub const MIN_IMPORTANCE_RANK: u8 = 1;
pub const MAX_IMPORTANCE_RANK: u8 = 10;

/// Ranks above this are rendered as highlighted.
pub const HIGHLIGHT_RANK_THRESHOLD: u8 = 7;

/// A section the model picked out of one of the uploaded documents, rewritten in
/// the requested tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSection {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub importance_rank: u8,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Location and text of a section, without ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReference {
    pub document: String,
    pub page: u32,
    pub section_title: String,
    pub content: String,
}

/// The only section data a chat turn is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContext {
    pub section_title: String,
    pub content: String,
}

impl ExtractedSection {
    pub fn is_highlighted(&self) -> bool {
        self.importance_rank > HIGHLIGHT_RANK_THRESHOLD
    }

    pub fn reference(&self) -> SectionReference {
        SectionReference {
            document: self.document.clone(),
            page: self.page,
            section_title: self.section_title.clone(),
            content: self.content.clone(),
        }
    }

    pub fn context(&self) -> SectionContext {
        SectionContext {
            section_title: self.section_title.clone(),
            content: self.content.clone(),
        }
    }
}

impl SectionReference {
    /// Same place in the same document, regardless of content wording.
    pub fn same_location(&self, other: &SectionReference) -> bool {
        self.document == other.document
            && self.page == other.page
            && self.section_title.trim() == other.section_title.trim()
    }

    /// Same location and same text. Distinguishes two sections the model gave
    /// the same title on one page.
    pub fn same_section(&self, other: &SectionReference) -> bool {
        self.same_location(other) && self.content.trim() == other.content.trim()
    }
}

/// Orders sections by descending importance. Equal ranks keep their input order.
pub fn sort_by_importance(sections: &mut [ExtractedSection]) {
    sections.sort_by(|a, b| b.importance_rank.cmp(&a.importance_rank));
}
