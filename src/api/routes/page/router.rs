//! Router for the browser chat page

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use axum_extra::extract::Query;
use uuid::Uuid;

use super::public;
use super::template::render_page;
use crate::api::public::ApiError;
use crate::api::routes::session_for_turn;
use crate::api::state::{AppState, SharedSession};
use crate::chat::{Bubble, Session};

type SharedState = Arc<RwLock<AppState>>;

fn page(
    state: &SharedState,
    session_id: String,
    bubbles: Vec<Bubble>,
    notice: Option<String>,
) -> Result<Html<String>, ApiError> {
    let context = public::PageContext {
        session_id,
        bubbles,
        notice,
    };
    let shared_state = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?;
    Ok(Html(render_page(&shared_state.templates, &context)?))
}

fn session_page(
    state: &SharedState,
    session: &Session,
    notice: Option<String>,
) -> Result<Html<String>, ApiError> {
    page(
        state,
        session.id().to_string(),
        session.transcript().collect(),
        notice,
    )
}

fn existing_session(
    state: &SharedState,
    session_id: Option<&str>,
) -> Result<Option<SharedSession>, ApiError> {
    let session = match session_id.map(str::trim) {
        Some(id) if !id.is_empty() => state
            .read()
            .map_err(|_| anyhow!("Unable to read shared state"))?
            .session(id),
        _ => None,
    };
    Ok(session)
}

/// Draw the chat page for a session. Only looks sessions up, a new
/// one is registered by the first message submitted from the page.
async fn show_page(
    State(state): State<SharedState>,
    Query(params): Query<public::PageQuery>,
) -> Result<Html<String>, ApiError> {
    match existing_session(&state, params.session_id.as_deref())? {
        Some(session) => {
            let session = session.lock().await;
            session_page(&state, &session, None)
        }
        // Unknown or missing session, draw an empty transcript with a
        // fresh ID for the form to submit
        None => page(&state, Uuid::new_v4().to_string(), vec![], None),
    }
}

/// Handle a message submitted from the sidebar and redraw the page
async fn submit_message(
    State(state): State<SharedState>,
    Form(form): Form<public::MessageForm>,
) -> Result<Html<String>, ApiError> {
    let (_, session, turns) = session_for_turn(&state, form.session_id.as_deref())?;

    let mut session = session.lock().await;
    let notice = match turns.next_turn(&mut session, &form.message).await {
        Ok(_) => None,
        Err(e) => Some(format!("Something went wrong: {}", e)),
    };

    session_page(&state, &session, notice)
}

/// Create the page router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(show_page).post(submit_message))
}
