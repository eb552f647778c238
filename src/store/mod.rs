//! In-memory state containers owned by [`crate::AppState`].
//!
//! Nothing here survives a restart.

pub mod chat_sessions;
pub mod moods;

pub use chat_sessions::{spawn_session_sweeper, ChatSessionStore};
pub use moods::MoodStore;
