use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{LlmClient, LlmClientError, OutputSchema};
use crate::application::prompts::{
    ANALYSIS_SCHEMA_NAME, RELATED_CONTENT_SCHEMA_NAME, RELATED_SECTION_LIMIT, citation_for,
};

/// Offline stand-in for the hosted model, used in scaffold mode to work on the
/// UI without credentials. Answers are fabricated from the prompt itself so they
/// pass the same validation as real responses.
pub struct ScaffoldLlmClient {
    delay: Duration,
}

impl ScaffoldLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl LlmClient for ScaffoldLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.pause().await;
        let title = line_values(prompt, "Section Title:")
            .next()
            .unwrap_or("this section");
        Ok(format!(
            "This is a scaffold reply; no model was consulted. {}",
            citation_for(title)
        ))
    }

    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, LlmClientError> {
        self.pause().await;
        let payload = match schema.name {
            ANALYSIS_SCHEMA_NAME => scaffold_analysis(prompt),
            RELATED_CONTENT_SCHEMA_NAME => scaffold_related(prompt),
            other => {
                return Err(LlmClientError::InvalidResponse(format!(
                    "scaffold has no canned answer for schema {other}"
                )));
            }
        };
        Ok(payload.to_string())
    }
}

fn scaffold_analysis(prompt: &str) -> serde_json::Value {
    let with_tags = prompt.contains("contextual tags");
    let sections: Vec<serde_json::Value> = line_values(prompt, "Document Name:")
        .enumerate()
        .map(|(index, name)| {
            let mut section = json!({
                "document": name,
                "page": 1,
                "sectionTitle": format!("Overview of {name}"),
                "importanceRank": 10usize.saturating_sub(index).max(1),
                "content": format!("Scaffold summary of {name}."),
            });
            if with_tags {
                section["tags"] = json!(["Key Takeaway"]);
            }
            section
        })
        .collect();
    json!({ "extractedSections": sections })
}

fn scaffold_related(prompt: &str) -> serde_json::Value {
    let listing = prompt
        .split_once("All Sections:")
        .map(|(_, rest)| rest)
        .unwrap_or_default();

    let related: Vec<serde_json::Value> = listing
        .split("---")
        .filter_map(|block| {
            let document = line_values(block, "Document:").next()?;
            let page: u32 = line_values(block, "Page:").next()?.parse().ok()?;
            let title = line_values(block, "Section Title:").next()?;
            let content = line_values(block, "Content:").next().unwrap_or_default();
            Some(json!({
                "document": document,
                "page": page,
                "sectionTitle": title,
                "content": content,
            }))
        })
        .take(RELATED_SECTION_LIMIT)
        .collect();
    json!({ "relatedContent": related })
}

fn line_values<'a>(text: &'a str, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.lines()
        .filter_map(move |line| line.trim_start().strip_prefix(label))
        .map(str::trim)
}
