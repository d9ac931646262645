use schemars::JsonSchema;
use serde::Deserialize;

use crate::application::ports::OutputSchema;
use crate::domain::SectionReference;

use super::structured_output::{SchemaViolation, require_text, whole_number};

pub const RELATED_CONTENT_SCHEMA_NAME: &str = "related_content";

/// How many related sections the model is asked for.
pub const RELATED_SECTION_LIMIT: usize = 3;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedContentOutput {
    /// The related content sections found.
    pub related_content: Vec<RelatedSectionOutput>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSectionOutput {
    /// The name of the document.
    pub document: String,
    /// The page number of the section.
    pub page: f64,
    /// The title of the section.
    pub section_title: String,
    /// The content of the section.
    pub content: String,
}

pub fn related_content_output_schema() -> OutputSchema {
    OutputSchema::of::<RelatedContentOutput>(RELATED_CONTENT_SCHEMA_NAME)
}

pub fn render_related_content_prompt(
    section: &SectionReference,
    candidates: &[SectionReference],
) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are an expert at finding related content.\n\n");
    prompt.push_str(
        "You will be given one section and a list of other sections from a set of documents.\n",
    );
    prompt.push_str(&format!(
        "Identify the top {RELATED_SECTION_LIMIT} sections from the list that are most \
         semantically related to the original section.\n"
    ));
    prompt.push_str("Do not include the original section in the results.\n\n");

    prompt.push_str("Original Section:\n");
    prompt.push_str(&format!("Title: {}\n", section.section_title));
    prompt.push_str(&format!("Content: {}\n\n", section.content));

    prompt.push_str("All Sections:\n");
    for candidate in candidates {
        prompt.push_str(&format!("  Document: {}\n", candidate.document));
        prompt.push_str(&format!("  Page: {}\n", candidate.page));
        prompt.push_str(&format!("  Section Title: {}\n", candidate.section_title));
        prompt.push_str(&format!("  Content: {}\n", candidate.content));
        prompt.push_str("  ---\n");
    }

    prompt.push_str(&format!(
        "\nReturn the {RELATED_SECTION_LIMIT} most related sections as JSON in the form \
         {{\"relatedContent\": [{{\"document\": ..., \"page\": ..., \"sectionTitle\": ..., \
         \"content\": ...}}]}}, copying each field exactly as listed."
    ));

    prompt
}

impl RelatedContentOutput {
    pub fn into_references(self) -> Result<Vec<SectionReference>, SchemaViolation> {
        self.related_content
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let at = |field: &str| format!("relatedContent[{index}].{field}");
                let page = whole_number(item.page, 1, u32::MAX).ok_or_else(|| {
                    SchemaViolation(format!(
                        "{}: expected a positive whole number, got {}",
                        at("page"),
                        item.page
                    ))
                })?;

                Ok(SectionReference {
                    document: require_text(item.document, &at("document"))?,
                    page,
                    section_title: require_text(item.section_title, &at("sectionTitle"))?,
                    content: item.content,
                })
            })
            .collect()
    }
}
