//! The core models for a single chat session.
use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Human,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Role::System => "system",
            Role::Human => "human",
            Role::Assistant => "assistant",
        };
        f.write_str(s)
    }
}

/// An immutable, role-tagged unit of text in a conversation.
///
/// System messages can only be created by
/// [`Conversation::initialize`](super::Conversation::initialize) so
/// that every conversation has exactly one, always first.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub(crate) fn system(content: &str) -> Self {
        Self {
            role: Role::System,
            content: content.to_string(),
        }
    }

    pub fn human(content: &str) -> Self {
        Self {
            role: Role::Human,
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
