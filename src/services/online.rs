use std::collections::HashSet;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::TrackId;
use crate::services::catalog::CatalogStore;

/// Source of online (history-driven) candidate tracks
///
/// The pluggable seam of the request pipeline: the production implementation
/// reads the similarity table, tests can substitute a failing or canned one.
#[cfg_attr(test, mockall::automock)]
pub trait CandidateGenerator: Send + Sync {
    /// At most `limit` candidate tracks for a user with the given recent history
    fn generate(&self, history: &[TrackId], limit: usize) -> AppResult<Vec<TrackId>>;
}

/// Candidate generator backed by the catalog's similarity-table pool
pub struct SimilarityCandidates {
    catalog: Arc<CatalogStore>,
}

impl SimilarityCandidates {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}

impl CandidateGenerator for SimilarityCandidates {
    fn generate(&self, history: &[TrackId], limit: usize) -> AppResult<Vec<TrackId>> {
        // Online signal requires at least one observed event; users with no
        // history get no online candidates at all. Fixed contract.
        if history.is_empty() {
            return Ok(Vec::new());
        }

        let played: HashSet<TrackId> = history.iter().copied().collect();
        let candidates = self
            .catalog
            .candidate_pool()
            .iter()
            .filter(|id| !played.contains(id))
            .take(limit)
            .copied()
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRow, PopularityRow, RecommendationRow, SimilarityRow};

    fn generator_with_pool(pool: &[TrackId]) -> SimilarityCandidates {
        let similar = pool
            .iter()
            .map(|&track_id| SimilarityRow { track_id })
            .collect();
        let catalog = CatalogStore::new(
            Vec::<RecommendationRow>::new(),
            Vec::<PopularityRow>::new(),
            similar,
            Vec::<ItemRow>::new(),
        );
        SimilarityCandidates::new(Arc::new(catalog))
    }

    #[test]
    fn test_empty_history_yields_no_candidates() {
        let generator = generator_with_pool(&[1, 2, 3]);
        assert_eq!(generator.generate(&[], 10).unwrap(), Vec::<TrackId>::new());
    }

    #[test]
    fn test_history_tracks_excluded_in_pool_order() {
        let generator = generator_with_pool(&[1, 2, 3, 4, 5]);
        assert_eq!(generator.generate(&[2, 4], 10).unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_limit_applied_after_exclusion() {
        let generator = generator_with_pool(&[1, 2, 3, 4, 5]);
        assert_eq!(generator.generate(&[1], 2).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_entire_pool_played() {
        let generator = generator_with_pool(&[1, 2]);
        assert_eq!(generator.generate(&[1, 2], 10).unwrap(), Vec::<TrackId>::new());
    }
}
