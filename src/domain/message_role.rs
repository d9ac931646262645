use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Author of a chat bubble. The browser labels model replies `bot`, which is
/// accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[serde(alias = "bot")]
    Assistant,
}

impl MessageRole {
    pub fn is_user(self) -> bool {
        self == Self::User
    }

    /// Heading shown above the bubble.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "DocuMiner AI",
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" | "bot" => Ok(Self::Assistant),
            _ => Err(format!("unknown chat sender `{value}`")),
        }
    }
}
