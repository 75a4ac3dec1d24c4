//! Session-scoped chat: conversation history, turn taking and
//! transcript rendering.
mod client;
mod models;
mod render;
mod session;
mod store;
mod turn;

pub use client::{BoxedModelClient, ModelClient, ModelError};
pub use models::{Message, Role};
pub use render::{Bubble, Transcript, render};
pub use session::Session;
pub use store::Conversation;
pub use turn::{Turn, TurnController};
