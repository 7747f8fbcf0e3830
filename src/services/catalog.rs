use std::collections::{HashMap, HashSet};

use crate::models::{ItemRow, PopularityRow, RecommendationRow, SimilarityRow, TrackId, UserId};

/// Immutable snapshot of the four precomputed catalog datasets
///
/// Built once at startup from the blob store and shared read-only across
/// requests behind an `Arc`; no locking is needed after construction.
pub struct CatalogStore {
    /// Per-user offline recommendations, sorted by rank ascending
    offline: HashMap<UserId, Vec<(TrackId, u32)>>,
    /// Global popularity ranking, best first
    top_popular: Vec<TrackId>,
    /// Distinct similarity-table track ids in first-seen order
    candidate_pool: Vec<TrackId>,
    /// Track metadata keyed by id, first row wins on duplicates
    items: HashMap<TrackId, ItemRow>,
}

impl CatalogStore {
    pub fn new(
        recommendations: Vec<RecommendationRow>,
        top_popular: Vec<PopularityRow>,
        similar: Vec<SimilarityRow>,
        items: Vec<ItemRow>,
    ) -> Self {
        let mut offline: HashMap<UserId, Vec<(TrackId, u32)>> = HashMap::new();
        for row in recommendations {
            offline
                .entry(row.user_id)
                .or_default()
                .push((row.track_id, row.rank));
        }
        for ranked in offline.values_mut() {
            ranked.sort_by_key(|&(_, rank)| rank);
        }

        let mut popular = top_popular;
        popular.sort_by_key(|row| row.popularity_rank);
        let top_popular = popular.into_iter().map(|row| row.track_id).collect();

        let mut seen = HashSet::new();
        let candidate_pool = similar
            .into_iter()
            .map(|row| row.track_id)
            .filter(|id| seen.insert(*id))
            .collect();

        let mut item_map = HashMap::new();
        for row in items {
            item_map.entry(row.track_id).or_insert(row);
        }

        Self {
            offline,
            top_popular,
            candidate_pool,
            items: item_map,
        }
    }

    /// Personalized offline candidates with rank <= k, best first
    ///
    /// Returns `None` for a cold user (no personalized rows at all), which is
    /// distinct from a user whose rows all fall outside the top k.
    pub fn offline_for_user(&self, user_id: UserId, k: usize) -> Option<Vec<TrackId>> {
        self.offline.get(&user_id).map(|ranked| {
            ranked
                .iter()
                .filter(|&&(_, rank)| rank as usize <= k)
                .map(|&(track_id, _)| track_id)
                .collect()
        })
    }

    /// Global top-k popularity list
    pub fn top_popular(&self, k: usize) -> Vec<TrackId> {
        self.top_popular.iter().take(k).copied().collect()
    }

    /// Deduplicated similarity-table track ids, first-seen order
    pub fn candidate_pool(&self) -> &[TrackId] {
        &self.candidate_pool
    }

    /// Metadata row for a track, if the catalog knows it
    pub fn item(&self, track_id: TrackId) -> Option<&ItemRow> {
        self.items.get(&track_id)
    }
}
