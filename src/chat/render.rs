//! Turns a conversation into render instructions for a UI.
//!
//! The leading system message is never shown. Each remaining message
//! becomes a `Bubble` labeled with the message's own role, so a
//! retried turn (two human messages in a row) still renders
//! correctly.
use std::fmt;
use std::iter::{Enumerate, Skip};
use std::slice::Iter;

use serde::Serialize;

use super::models::{Message, Role};
use super::store::Conversation;

/// A single chat bubble to draw.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct Bubble {
    pub role: Role,
    pub text: String,
    // Stable across refreshes since the conversation is append-only
    pub key: String,
}

impl fmt::Display for Bubble {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.role {
            Role::Human => write!(f, "You: {}", self.text),
            Role::Assistant => write!(f, "Assistant: {}", self.text),
            Role::System => write!(f, "System: {}", self.text),
        }
    }
}

/// Lazy iterator of bubbles borrowed from a conversation. Calling
/// [`render`] again starts over from the same conversation.
#[derive(Clone)]
pub struct Transcript<'a> {
    messages: Skip<Enumerate<Iter<'a, Message>>>,
}

impl Iterator for Transcript<'_> {
    type Item = Bubble;

    fn next(&mut self) -> Option<Self::Item> {
        self.messages.next().map(|(idx, msg)| Bubble {
            role: msg.role(),
            text: msg.content().to_string(),
            key: format!("{}-{}", msg.role(), idx),
        })
    }
}

pub fn render(conversation: &Conversation) -> Transcript<'_> {
    Transcript {
        messages: conversation.iter().enumerate().skip(1),
    }
}
