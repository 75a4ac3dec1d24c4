use std::sync::Arc;

use super::client::{BoxedModelClient, ModelClient, ModelError};
use super::models::Message;
use super::session::Session;

#[derive(Debug, PartialEq, Eq)]
pub enum Turn {
    /// Blank input, nothing was sent and the conversation is unchanged
    Skipped,
    Completed { reply: String },
}

/// Runs one turn of the chat: record the user's message, ask the
/// model for a reply, record the reply.
#[derive(Clone)]
pub struct TurnController {
    client: BoxedModelClient,
}

impl TurnController {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// The human message is appended before the model is called so a
    /// failed call still leaves it in the history. On failure no
    /// assistant message is appended and the error is returned to the
    /// caller.
    pub async fn next_turn(&self, session: &mut Session, input: &str) -> Result<Turn, ModelError> {
        if input.trim().is_empty() {
            tracing::debug!("Skipping empty input for session {}", session.id());
            return Ok(Turn::Skipped);
        }

        session.conversation_mut().append(Message::human(input));

        tracing::debug!(
            "Requesting reply for session {} with {} messages",
            session.id(),
            session.conversation().len()
        );

        match self.client.complete(session.conversation().all()).await {
            Ok(reply) => {
                session
                    .conversation_mut()
                    .append(Message::assistant(&reply));
                tracing::info!("Completed turn for session {}", session.id());
                Ok(Turn::Completed { reply })
            }
            Err(e) => {
                tracing::error!("Turn failed for session {}: {}", session.id(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::Role;

    /// Replies with a canned response and records what it was sent.
    struct EchoClient {
        seen: Mutex<Vec<Vec<Message>>>,
    }

    #[async_trait]
    impl ModelClient for EchoClient {
        async fn complete(&self, messages: &[Message]) -> Result<String, ModelError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            let last = messages.last().map(|m| m.content()).unwrap_or_default();
            Ok(format!("You said: {}", last))
        }
    }

    struct QuotaClient;

    #[async_trait]
    impl ModelClient for QuotaClient {
        async fn complete(&self, _messages: &[Message]) -> Result<String, ModelError> {
            Err(ModelError::Quota("You exceeded your current quota".to_string()))
        }
    }

    fn echo() -> Arc<EchoClient> {
        Arc::new(EchoClient {
            seen: Mutex::new(vec![]),
        })
    }

    fn roles(session: &Session) -> Vec<Role> {
        session.conversation().iter().map(|m| m.role()).collect()
    }

    #[tokio::test]
    async fn test_successful_turn_appends_human_then_assistant() {
        let client = echo();
        let turns = TurnController::new(client.clone());
        let mut session = Session::new("test", "You are a helpful assistant.");

        let result = turns.next_turn(&mut session, "Hello").await.unwrap();

        assert_eq!(
            result,
            Turn::Completed {
                reply: "You said: Hello".to_string()
            }
        );
        assert_eq!(roles(&session), vec![Role::System, Role::Human, Role::Assistant]);
        assert_eq!(session.conversation().all()[1].content(), "Hello");

        // The model sees the system message and the new human message
        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][0].role(), Role::System);
    }

    #[tokio::test]
    async fn test_full_history_is_sent_each_turn() {
        let client = echo();
        let turns = TurnController::new(client.clone());
        let mut session = Session::new("test", "system");

        turns.next_turn(&mut session, "one").await.unwrap();
        turns.next_turn(&mut session, "two").await.unwrap();

        let seen = client.seen.lock().unwrap();
        let contents: Vec<&str> = seen[1].iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["system", "one", "You said: one", "two"]);
        assert_eq!(session.conversation().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_human_message_only() {
        let turns = TurnController::new(Arc::new(QuotaClient));
        let mut session = Session::new("test", "system");

        let result = turns.next_turn(&mut session, "Hi").await;

        assert!(matches!(result, Err(ModelError::Quota(_))));
        assert_eq!(roles(&session), vec![Role::System, Role::Human]);
        assert_eq!(session.transcript().count(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_is_skipped() {
        let client = echo();
        let turns = TurnController::new(client.clone());
        let mut session = Session::new("test", "system");

        for input in ["", "   ", "\n\t"] {
            let result = turns.next_turn(&mut session, input).await.unwrap();
            assert_eq!(result, Turn::Skipped);
        }

        assert_eq!(session.conversation().len(), 1);
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_system_message_stays_first() {
        let turns = TurnController::new(echo());
        let mut session = Session::new("test", "system");

        for i in 0..10 {
            turns
                .next_turn(&mut session, &format!("message {}", i))
                .await
                .unwrap();
        }

        let system_msgs: Vec<usize> = session
            .conversation()
            .iter()
            .enumerate()
            .filter(|(_, m)| m.role() == Role::System)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(system_msgs, vec![0]);
        assert_eq!(session.conversation().len(), 21);
    }
}
