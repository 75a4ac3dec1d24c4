use super::render::{Transcript, render};
use super::store::Conversation;

/// One interactive session. Owns its conversation exclusively, nothing
/// is shared between sessions.
#[derive(Debug)]
pub struct Session {
    id: String,
    conversation: Conversation,
}

impl Session {
    pub fn new(id: &str, system_instruction: &str) -> Self {
        let mut conversation = Conversation::new();
        conversation.initialize(system_instruction);
        Self {
            id: id.to_string(),
            conversation,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    pub fn transcript(&self) -> Transcript<'_> {
        render(&self.conversation)
    }
}
