//! API routes module

pub mod chat;
pub mod page;

use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use axum::Router;

use crate::api::state::{AppState, SharedSession};
use crate::chat::TurnController;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
}

/// Look up (or start) a session and grab what's needed to run a turn
/// on it. The shared state lock is released before returning so it is
/// never held while waiting on the model.
fn session_for_turn(
    state: &SharedState,
    session_id: Option<&str>,
) -> Result<(String, SharedSession, TurnController)> {
    let mut shared_state = state
        .write()
        .map_err(|_| anyhow!("Unable to write shared state"))?;
    let (id, session) = shared_state.get_or_create_session(session_id);
    Ok((id, session, shared_state.turns.clone()))
}
