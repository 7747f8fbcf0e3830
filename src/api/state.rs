use std::sync::Arc;

use crate::services::{CatalogStore, EventHistoryStore, Recommender};

/// Shared application state
///
/// The catalog is read-only after startup and the event store handles its
/// own locking, so the state is plain `Arc`s cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventHistoryStore>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Builds the request-serving state around a fully loaded catalog
    pub fn new(catalog: CatalogStore, max_events_per_user: usize) -> Self {
        let catalog = Arc::new(catalog);
        let events = Arc::new(EventHistoryStore::new(max_events_per_user));
        let recommender = Arc::new(Recommender::new(catalog, Arc::clone(&events)));

        Self {
            events,
            recommender,
        }
    }
}
