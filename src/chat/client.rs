use async_trait::async_trait;
use thiserror::Error;

use super::models::Message;

/// Reasons a call to the model can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("authentication with the model API failed ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("model API quota exceeded: {0}")]
    Quota(String),
    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("request to the model API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response from the model API: {0}")]
    Malformed(String),
}

/// Anything that maps an ordered conversation to the assistant's
/// next reply.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, ModelError>;
}

pub type BoxedModelClient = std::sync::Arc<dyn ModelClient>;
