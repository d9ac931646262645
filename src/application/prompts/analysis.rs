use schemars::JsonSchema;
use serde::Deserialize;

use crate::application::ports::OutputSchema;
use crate::domain::{
    AnalysisParameters, ExtractedSection, MAX_IMPORTANCE_RANK, MIN_IMPORTANCE_RANK,
};

use super::structured_output::{SchemaViolation, require_text, whole_number};

pub const ANALYSIS_SCHEMA_NAME: &str = "extracted_sections";

const TAG_EXAMPLES: &str = "\"Key Takeaway\", \"Action Item\", \"Data Point\" or \"Insider Tip\"";

/// A document as it appears inside the analysis prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptDocument<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Expected response shape of the analysis call.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    /// The extracted sections from the documents.
    pub extracted_sections: Vec<ExtractedSectionOutput>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSectionOutput {
    /// The name of the document, exactly as listed in the prompt.
    pub document: String,
    /// The page number of the section.
    #[schemars(range(min = 1))]
    pub page: f64,
    /// The title of the section.
    pub section_title: String,
    /// The importance rank of the section (1-10, 10 being the most important).
    #[schemars(range(min = 1, max = 10))]
    pub importance_rank: f64,
    /// The content of the section, rewritten in the requested tone.
    pub content: String,
    /// Contextual tags like "Key Takeaway", "Action Item", or "Insider Tip".
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

pub fn analysis_output_schema() -> OutputSchema {
    OutputSchema::of::<AnalysisOutput>(ANALYSIS_SCHEMA_NAME)
}

pub fn render_analysis_prompt(
    documents: &[PromptDocument<'_>],
    params: &AnalysisParameters,
) -> String {
    let tone = params.tone.as_str();
    let mut prompt = String::new();

    prompt.push_str("You are an expert document analyst.\n\n");
    prompt.push_str(
        "You will analyze a collection of documents and extract the sections that matter \
         most for the persona and job-to-be-done below.\n",
    );
    prompt.push_str(&format!(
        "Every extracted section must be rewritten in a {tone} tone.\n\n"
    ));

    prompt.push_str("Documents:\n");
    for document in documents {
        prompt.push_str(&format!(
            "  Document Name: {}\n  Content: {}\n\n",
            document.name, document.content
        ));
    }

    prompt.push_str(&format!("Persona: {}\n", params.persona));
    prompt.push_str(&format!("Job to be done: {}\n", params.job_to_be_done));
    prompt.push_str(&format!("Tone: {tone}\n\n"));

    if params.include_contextual_tags {
        prompt.push_str(&format!(
            "You must also add relevant contextual tags to each section, such as {TAG_EXAMPLES}.\n\n"
        ));
    }

    prompt.push_str(&format!(
        "Extract only the sections most relevant to the persona and job-to-be-done. For each \
         section give the document name exactly as listed above, the page number (pages are \
         marked [Page N] in the content), the section title, an importance rank from \
         {MIN_IMPORTANCE_RANK} to {MAX_IMPORTANCE_RANK}, and the content rewritten in the \
         specified tone.\n\n"
    ));

    prompt.push_str("Respond with JSON only, in this format:\n");
    prompt.push_str("{\n  \"extractedSections\": [\n    {\n");
    prompt.push_str("      \"document\": \"document name\",\n");
    prompt.push_str("      \"page\": page number,\n");
    prompt.push_str("      \"sectionTitle\": \"section title\",\n");
    prompt.push_str("      \"importanceRank\": importance rank,\n");
    prompt.push_str(&format!(
        "      \"content\": \"content of the section rewritten in a {tone} tone\""
    ));
    if params.include_contextual_tags {
        prompt.push_str(",\n      \"tags\": [\"tag1\", \"tag2\"]");
    }
    prompt.push_str("\n    }\n  ]\n}");

    prompt
}

impl AnalysisOutput {
    /// Checks every entry against the declared shape and the submitted documents.
    ///
    /// One bad entry rejects the whole response. Document names are canonicalized
    /// to the uploaded spelling; tags are dropped unless they were requested.
    pub fn into_sections(
        self,
        document_names: &[&str],
        include_tags: bool,
    ) -> Result<Vec<ExtractedSection>, SchemaViolation> {
        self.extracted_sections
            .into_iter()
            .enumerate()
            .map(|(index, section)| section.validate(index, document_names, include_tags))
            .collect()
    }
}

impl ExtractedSectionOutput {
    fn validate(
        self,
        index: usize,
        document_names: &[&str],
        include_tags: bool,
    ) -> Result<ExtractedSection, SchemaViolation> {
        let at = |field: &str| format!("extractedSections[{index}].{field}");

        let document = resolve_document_name(&self.document, document_names).ok_or_else(|| {
            SchemaViolation(format!(
                "{}: unknown document \"{}\"",
                at("document"),
                self.document
            ))
        })?;

        let page = whole_number(self.page, 1, u32::MAX).ok_or_else(|| {
            SchemaViolation(format!(
                "{}: expected a positive whole number, got {}",
                at("page"),
                self.page
            ))
        })?;

        let importance_rank = whole_number(
            self.importance_rank,
            u32::from(MIN_IMPORTANCE_RANK),
            u32::from(MAX_IMPORTANCE_RANK),
        )
        .ok_or_else(|| {
            SchemaViolation(format!(
                "{}: expected a whole number between {MIN_IMPORTANCE_RANK} and {MAX_IMPORTANCE_RANK}, got {}",
                at("importanceRank"),
                self.importance_rank
            ))
        })?;

        let tags = if include_tags {
            self.tags
                .map(|tags| {
                    tags.into_iter()
                        .map(|tag| tag.trim().to_string())
                        .filter(|tag| !tag.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|tags| !tags.is_empty())
        } else {
            None
        };

        Ok(ExtractedSection {
            document: document.to_string(),
            page,
            section_title: require_text(self.section_title, &at("sectionTitle"))?,
            importance_rank: importance_rank as u8,
            content: require_text(self.content, &at("content"))?,
            tags,
        })
    }
}

fn resolve_document_name<'a>(claimed: &str, document_names: &[&'a str]) -> Option<&'a str> {
    let claimed = claimed.trim();
    document_names
        .iter()
        .copied()
        .find(|name| *name == claimed)
        .or_else(|| {
            document_names.iter().copied().find(|name| {
                name.eq_ignore_ascii_case(claimed) || file_stem(name).eq_ignore_ascii_case(claimed)
            })
        })
}

fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}
