use schemars::JsonSchema;

/// JSON Schema a structured completion must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    pub name: &'static str,
    pub schema: serde_json::Value,
}

impl OutputSchema {
    pub fn of<T: JsonSchema>(name: &'static str) -> Self {
        Self {
            name,
            schema: schemars::schema_for!(T).to_value(),
        }
    }
}
