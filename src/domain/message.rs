use serde::{Deserialize, Serialize};

use super::MessageRole;

/// One bubble in a section chat dialog.
///
/// Transcripts live in the browser for the lifetime of the dialog; the server
/// only ever produces single assistant replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender: MessageRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_loading: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: MessageRole::User,
            text: text.into(),
            is_loading: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: MessageRole::Assistant,
            text: text.into(),
            is_loading: false,
        }
    }

    /// Placeholder shown while a reply is in flight.
    pub fn pending() -> Self {
        Self {
            sender: MessageRole::Assistant,
            text: String::new(),
            is_loading: true,
        }
    }
}
