//! Router for the chat API

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::routes::session_for_turn;
use crate::api::state::AppState;
use crate::chat::Turn;

type SharedState = Arc<RwLock<AppState>>;

/// Get the transcript of a single chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?
        .session(&id);

    let Some(session) = session else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    let session = session.lock().await;
    let transcript = session.transcript().collect();

    Ok(Json(public::ChatTranscriptResponse {
        session_id: id,
        transcript,
    })
    .into_response())
}

/// Take a turn in a chat session and respond with the reply and the
/// updated transcript
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (session_id, session, turns) = session_for_turn(&state, payload.session_id.as_deref())?;

    let mut session = session.lock().await;
    let (status, reply, error) = match turns.next_turn(&mut session, &payload.message).await {
        Ok(Turn::Completed { reply }) => (StatusCode::OK, Some(reply), None),
        Ok(Turn::Skipped) => (StatusCode::OK, None, None),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            None,
            Some(format!("Something went wrong: {}", e)),
        ),
    };
    let transcript = session.transcript().collect();

    Ok((
        status,
        Json(public::ChatResponse {
            session_id,
            reply,
            error,
            transcript,
        }),
    ))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
}
