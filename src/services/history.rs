use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::{TrackId, UserId};

/// Bounded per-user store of recently played tracks, most recent first
///
/// The only mutable shared state in the service. A single map-wide
/// `RwLock` serializes writes; reads for different users proceed in
/// parallel under the read lock.
pub struct EventHistoryStore {
    events: RwLock<HashMap<UserId, Vec<TrackId>>>,
    max_events: usize,
}

impl EventHistoryStore {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            max_events,
        }
    }

    /// Prepends a play event, truncating the history to the configured cap
    ///
    /// No dedup is applied: a replayed track appears again. Always succeeds.
    pub async fn record(&self, user_id: UserId, track_id: TrackId) {
        let mut events = self.events.write().await;
        let history = events.entry(user_id).or_default();
        history.insert(0, track_id);
        history.truncate(self.max_events);
    }

    /// The user's most recent events, newest first, at most `limit` entries
    ///
    /// Unknown users get an empty history.
    pub async fn recent(&self, user_id: UserId, limit: usize) -> Vec<TrackId> {
        let events = self.events.read().await;
        events
            .get(&user_id)
            .map(|history| history.iter().take(limit).copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_most_recent_first() {
        let store = EventHistoryStore::new(20);
        store.record(1, 100).await;
        store.record(1, 200).await;
        store.record(1, 300).await;
        assert_eq!(store.recent(1, 10).await, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn test_limit_applies_to_reads() {
        let store = EventHistoryStore::new(20);
        for track_id in 1..=5 {
            store.record(7, track_id).await;
        }
        assert_eq!(store.recent(7, 2).await, vec![5, 4]);
    }

    #[tokio::test]
    async fn test_history_capped_at_max_events() {
        let store = EventHistoryStore::new(3);
        for track_id in 1..=10 {
            store.record(1, track_id).await;
        }
        assert_eq!(store.recent(1, 100).await, vec![10, 9, 8]);
    }

    #[tokio::test]
    async fn test_replays_are_not_deduplicated() {
        let store = EventHistoryStore::new(20);
        store.record(1, 42).await;
        store.record(1, 42).await;
        assert_eq!(store.recent(1, 10).await, vec![42, 42]);
    }

    #[tokio::test]
    async fn test_unknown_user_is_empty() {
        let store = EventHistoryStore::new(20);
        assert!(store.recent(404, 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = EventHistoryStore::new(20);
        store.record(1, 100).await;
        store.record(2, 200).await;
        assert_eq!(store.recent(1, 10).await, vec![100]);
        assert_eq!(store.recent(2, 10).await, vec![200]);
    }
}
