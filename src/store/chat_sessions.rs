use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::chat::ChatMessage;
use crate::services::chatbot;

/// Oldest turns are dropped once a transcript reaches this many messages.
pub const MAX_TRANSCRIPT_MESSAGES: usize = 200;

struct Session {
    messages: Vec<ChatMessage>,
    last_active: Instant,
}

/// Chat transcripts keyed by session id. Messages are appended and only the
/// newest [`MAX_TRANSCRIPT_MESSAGES`] are kept; idle sessions are removed by
/// [`spawn_session_sweeper`].
#[derive(Clone, Default)]
pub struct ChatSessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl ChatSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session seeded with the greeting and returns its id and
    /// that first message.
    pub async fn create(&self) -> (Uuid, ChatMessage) {
        let id = Uuid::new_v4();
        let greeting = ChatMessage::from_bot(chatbot::greeting());
        self.sessions.write().await.insert(
            id,
            Session {
                messages: vec![greeting.clone()],
                last_active: Instant::now(),
            },
        );
        (id, greeting)
    }

    /// Appends the user's message and the bot's reply, returning the reply.
    /// `None` if the session does not exist.
    pub async fn exchange(&self, session_id: Uuid, text: &str) -> Option<ChatMessage> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&session_id)?;

        let reply = ChatMessage::from_bot(chatbot::respond_to_message(text));
        session.messages.push(ChatMessage::from_user(text));
        session.messages.push(reply.clone());
        session.last_active = Instant::now();

        let overflow = session
            .messages
            .len()
            .saturating_sub(MAX_TRANSCRIPT_MESSAGES);
        if overflow > 0 {
            session.messages.drain(..overflow);
        }

        Some(reply)
    }

    pub async fn transcript(&self, session_id: Uuid) -> Option<Vec<ChatMessage>> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .map(|session| session.messages.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Removes sessions with no activity for at least `max_idle`.
    pub async fn sweep_idle(&self, max_idle: Duration) -> usize {
        self.sweep_idle_at(Instant::now(), max_idle).await
    }

    async fn sweep_idle_at(&self, now: Instant, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            now.saturating_duration_since(session.last_active) < max_idle
        });
        before - sessions.len()
    }
}

pub fn spawn_session_sweeper(store: ChatSessionStore, max_idle: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let removed = store.sweep_idle(max_idle).await;
            if removed > 0 {
                tracing::info!(purged = removed, "Chat cleanup: purged idle sessions");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Sender;

    #[tokio::test]
    async fn test_new_session_starts_with_greeting() {
        let store = ChatSessionStore::new();
        let (id, greeting) = store.create().await;

        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.suggestions.as_ref().map(Vec::len), Some(4));

        let transcript = store.transcript(id).await.unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_exchange_appends_both_turns() {
        let store = ChatSessionStore::new();
        let (id, _) = store.create().await;

        let reply = store.exchange(id, "I'm so stressed").await.unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.text.starts_with("Stress can be overwhelming"));

        let transcript = store.transcript(id).await.unwrap();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].sender, Sender::User);
        assert_eq!(transcript[1].text, "I'm so stressed");
        assert!(transcript[1].suggestions.is_none());
        assert_eq!(transcript[2].id, reply.id);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = ChatSessionStore::new();
        assert!(store.exchange(Uuid::new_v4(), "hello").await.is_none());
        assert!(store.transcript(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_transcript_is_capped() {
        let store = ChatSessionStore::new();
        let (id, _) = store.create().await;

        for i in 0..500 {
            store.exchange(id, &format!("message {}", i)).await.unwrap();
        }

        let transcript = store.transcript(id).await.unwrap();
        assert_eq!(transcript.len(), MAX_TRANSCRIPT_MESSAGES);
        // Newest turns survive
        assert_eq!(transcript[transcript.len() - 2].text, "message 499");
        assert_eq!(transcript.last().unwrap().sender, Sender::Bot);
    }

    #[tokio::test]
    async fn test_sweep_drops_stale_sessions() {
        let store = ChatSessionStore::new();
        let (stale, _) = store.create().await;
        let (fresh, _) = store.create().await;

        // Make `fresh` strictly newer than `stale`
        tokio::time::sleep(Duration::from_millis(20)).await;
        store.exchange(fresh, "hello").await.unwrap();

        let idle = Duration::from_secs(60);
        let later = {
            let sessions = store.sessions.read().await;
            sessions[&stale].last_active + idle
        };

        assert_eq!(store.sweep_idle_at(later, idle).await, 1);
        assert!(store.transcript(stale).await.is_none());
        assert!(store.transcript(fresh).await.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sweep_keeps_active_sessions() {
        let store = ChatSessionStore::new();
        store.create().await;
        assert_eq!(store.sweep_idle(Duration::from_secs(1800)).await, 0);
        assert_eq!(store.len().await, 1);
    }
}
