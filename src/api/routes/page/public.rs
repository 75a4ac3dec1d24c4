//! Public types for the chat page
use serde::{Deserialize, Serialize};

use crate::chat::Bubble;

#[derive(Deserialize)]
pub struct PageQuery {
    pub session_id: Option<String>,
}

/// The sidebar form
#[derive(Deserialize)]
pub struct MessageForm {
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct PageContext {
    pub session_id: String,
    pub bubbles: Vec<Bubble>,
    // Shown above the transcript when the last turn failed
    pub notice: Option<String>,
}
