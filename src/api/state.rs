use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use handlebars::Handlebars;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::routes::page::templates;
use crate::chat::{BoxedModelClient, Session, TurnController};
use crate::core::AppConfig;

/// A session is locked for the whole turn so submissions to the same
/// session are handled one at a time.
pub type SharedSession = Arc<Mutex<Session>>;

/// Sessions with no turns for this long are discarded.
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct SessionEntry {
    session: SharedSession,
    last_active: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub turns: TurnController,
    pub templates: Handlebars<'static>,
    // Sessions only live in memory and are lost on restart
    sessions: HashMap<String, SessionEntry>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl AppState {
    pub fn new(config: AppConfig, client: BoxedModelClient) -> Result<Self> {
        Self::with_limits(
            config,
            client,
            DEFAULT_SESSION_IDLE_TIMEOUT,
            DEFAULT_MAX_SESSIONS,
        )
    }

    pub fn with_limits(
        config: AppConfig,
        client: BoxedModelClient,
        idle_timeout: Duration,
        max_sessions: usize,
    ) -> Result<Self> {
        Ok(Self {
            config,
            turns: TurnController::new(client),
            templates: templates()?,
            sessions: HashMap::new(),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        })
    }

    /// Look up an existing session without creating or touching it.
    pub fn session(&self, id: &str) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| Arc::clone(&entry.session))
    }

    /// Returns the session for `id`, creating it if needed. A new ID is
    /// generated when none is given. Only called when a turn is about
    /// to be taken, so viewing a page never registers a session.
    pub fn get_or_create_session(&mut self, id: Option<&str>) -> (String, SharedSession) {
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        let now = Instant::now();

        if !self.sessions.contains_key(&id) {
            self.evict(now);
        }

        let system_message = &self.config.system_message;
        let entry = self.sessions.entry(id.clone()).or_insert_with(|| {
            tracing::info!("Starting new session {}", id);
            SessionEntry {
                session: Arc::new(Mutex::new(Session::new(&id, system_message))),
                last_active: now,
            }
        });
        entry.last_active = now;

        (id, Arc::clone(&entry.session))
    }

    /// Drop idle sessions, then the least recently active ones until
    /// there is room for one more. A turn already in flight keeps its
    /// own handle to the session.
    fn evict(&mut self, now: Instant) {
        let idle_timeout = self.idle_timeout;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.duration_since(entry.last_active) < idle_timeout);

        while self.sessions.len() >= self.max_sessions {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_active)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    self.sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - self.sessions.len();
        if evicted > 0 {
            tracing::info!("Evicted {} sessions", evicted);
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
