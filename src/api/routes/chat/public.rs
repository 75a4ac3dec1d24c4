//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::Bubble;

#[derive(Deserialize)]
pub struct ChatRequest {
    // A new session is started when this is missing
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: Option<String>,
    pub error: Option<String>,
    pub transcript: Vec<Bubble>,
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub session_id: String,
    pub transcript: Vec<Bubble>,
}
