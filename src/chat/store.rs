//! Append-only conversation history for one session.
use super::models::{Message, Role};

#[derive(Default, Debug, Clone)]
pub struct Conversation(Vec<Message>);

impl Conversation {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Seed the conversation with the system instruction. Safe to call
    /// on every interaction, only the first call on an empty
    /// conversation has any effect.
    pub fn initialize(&mut self, system_instruction: &str) {
        if self.0.is_empty() {
            self.0.push(Message::system(system_instruction));
        }
    }

    /// Adds a message to the end of the conversation.
    ///
    /// System messages are ignored, the only one allowed is the one
    /// created by `initialize`.
    pub fn append(&mut self, msg: Message) {
        if msg.role() == Role::System {
            tracing::warn!("Ignoring system message appended after initialization");
            return;
        }
        self.0.push(msg)
    }

    pub fn all(&self) -> &[Message] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let mut conversation = Conversation::new();
        for _ in 0..5 {
            conversation.initialize("You are a helpful assistant.");
        }

        assert_eq!(conversation.len(), 1);
        let first = conversation.all().first().unwrap();
        assert_eq!(first.role(), Role::System);
        assert_eq!(first.content(), "You are a helpful assistant.");
    }

    #[test]
    fn test_initialize_after_turns_does_nothing() {
        let mut conversation = Conversation::new();
        conversation.initialize("first");
        conversation.append(Message::human("Hello"));
        conversation.initialize("second");

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.all()[0].content(), "first");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.initialize("system");
        conversation.append(Message::human("H1"));
        conversation.append(Message::assistant("A1"));
        conversation.append(Message::human("H2"));

        let contents: Vec<&str> = conversation.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["system", "H1", "A1", "H2"]);
        assert_eq!(conversation.last().unwrap().content(), "H2");
    }

    #[test]
    fn test_append_rejects_system_messages() {
        let mut conversation = Conversation::new();
        conversation.initialize("system");
        conversation.append(Message::system("another system"));

        assert_eq!(conversation.len(), 1);
        let system_count = conversation
            .iter()
            .filter(|m| m.role() == Role::System)
            .count();
        assert_eq!(system_count, 1);
    }
}
