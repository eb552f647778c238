use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::mood::MoodRecord;

pub const DEFAULT_MAX_ENTRIES_PER_USER: usize = 5000;

/// Per-user mood logs, newest entry first. Each log keeps at most
/// `max_entries_per_user` records; the oldest are evicted.
#[derive(Clone)]
pub struct MoodStore {
    logs: Arc<RwLock<HashMap<String, VecDeque<MoodRecord>>>>,
    max_entries_per_user: usize,
}

impl Default for MoodStore {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES_PER_USER)
    }
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries_per_user: usize) -> Self {
        Self {
            logs: Arc::default(),
            max_entries_per_user: max_entries_per_user.max(1),
        }
    }

    /// Records an entry and returns how many the user now has.
    pub async fn log(&self, user_id: &str, record: MoodRecord) -> usize {
        let mut logs = self.logs.write().await;
        let entries = logs.entry(user_id.to_string()).or_default();
        entries.push_front(record);
        entries.truncate(self.max_entries_per_user);
        entries.len()
    }

    pub async fn list(&self, user_id: &str, limit: Option<usize>) -> Vec<MoodRecord> {
        let logs = self.logs.read().await;
        match logs.get(user_id) {
            Some(entries) => entries
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Full log for one user, in display order.
    pub async fn snapshot(&self, user_id: &str) -> Vec<MoodRecord> {
        self.list(user_id, None).await
    }

    /// Every user with their full log, ordered by user id.
    pub async fn users(&self) -> Vec<(String, Vec<MoodRecord>)> {
        let logs = self.logs.read().await;
        let mut users: Vec<(String, Vec<MoodRecord>)> = logs
            .iter()
            .map(|(id, entries)| (id.clone(), entries.iter().cloned().collect()))
            .collect();
        users.sort_by(|a, b| a.0.cmp(&b.0));
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::Sentiment;
    use chrono::NaiveDate;

    fn record(day: u32, score: f64) -> MoodRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        MoodRecord::new(date, Sentiment::Neutral, score, format!("day {}", day)).unwrap()
    }

    #[tokio::test]
    async fn test_log_keeps_newest_first() {
        let store = MoodStore::new();
        assert_eq!(store.log("alice", record(1, 0.4)).await, 1);
        assert_eq!(store.log("alice", record(2, 0.6)).await, 2);

        let entries = store.snapshot("alice").await;
        assert_eq!(entries[0].text(), "day 2");
        assert_eq!(entries[1].text(), "day 1");
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_user() {
        let store = MoodStore::new();
        for day in 1..=5 {
            store.log("alice", record(day, 0.5)).await;
        }
        store.log("bob", record(9, 0.5)).await;

        assert_eq!(store.list("alice", Some(2)).await.len(), 2);
        assert_eq!(store.list("bob", None).await.len(), 1);
        assert!(store.list("carol", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_log_evicts_oldest_past_cap() {
        let store = MoodStore::with_max_entries(3);
        for day in 1..=5 {
            store.log("alice", record(day, 0.5)).await;
        }

        let texts: Vec<String> = store
            .snapshot("alice")
            .await
            .iter()
            .map(|r| r.text().to_string())
            .collect();
        assert_eq!(texts, vec!["day 5", "day 4", "day 3"]);
        assert_eq!(store.log("alice", record(6, 0.5)).await, 3);
    }

    #[tokio::test]
    async fn test_users_sorted_by_id() {
        let store = MoodStore::new();
        store.log("zoe", record(1, 0.5)).await;
        store.log("adam", record(2, 0.5)).await;

        let ids: Vec<String> = store.users().await.into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["adam", "zoe"]);
    }
}
