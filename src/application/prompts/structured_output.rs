use serde::de::DeserializeOwned;

/// The model answered, but not in the declared shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SchemaViolation(pub String);

/// Parses a structured completion into `T`.
///
/// Providers that ignore `response_format` tend to wrap JSON in Markdown fences or
/// surround it with prose, so the JSON object is located first.
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T, SchemaViolation> {
    let block = extract_json_block(response)?;
    serde_json::from_str(block)
        .map_err(|e| SchemaViolation(format!("response does not match schema: {e}")))
}

pub fn extract_json_block(response: &str) -> Result<&str, SchemaViolation> {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + "```json".len()..];
        if let Some(end) = after_fence.find("```") {
            return Ok(after_fence[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            let block = after_fence[..end].trim();
            if block.starts_with('{') {
                return Ok(block);
            }
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&trimmed[start..=end]),
        _ => Err(SchemaViolation(
            "no JSON object found in model response".to_string(),
        )),
    }
}

/// Accepts `value` only if it is a whole number within `min..=max`.
pub(crate) fn whole_number(value: f64, min: u32, max: u32) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(min) || value > f64::from(max) {
        return None;
    }
    Some(value as u32)
}

pub(crate) fn require_text(value: String, field: &str) -> Result<String, SchemaViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SchemaViolation(format!("{field}: must not be empty")));
    }
    Ok(trimmed.to_string())
}
