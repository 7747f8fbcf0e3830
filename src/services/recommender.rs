use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{BlendedTrack, EnrichedRecommendation, Source, TrackId, UserId};
use crate::services::blend::blend;
use crate::services::catalog::CatalogStore;
use crate::services::enrich::enrich;
use crate::services::history::EventHistoryStore;
use crate::services::online::{CandidateGenerator, SimilarityCandidates};

/// How many recent events feed the online candidate generator
const RECENT_HISTORY_WINDOW: usize = 5;

/// Recommendations for one request, with per-source counts for the stats block
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub recommendations: Vec<EnrichedRecommendation>,
    pub offline_count: usize,
    pub online_count: usize,
}

/// Orchestrates the offline lookup, online generation, blend and enrichment
///
/// Failures inside the pipeline are an explicit `Result`, resolved here by
/// the popularity fallback; they never propagate to the HTTP boundary.
pub struct Recommender {
    catalog: Arc<CatalogStore>,
    events: Arc<EventHistoryStore>,
    online: Box<dyn CandidateGenerator>,
}

impl Recommender {
    pub fn new(catalog: Arc<CatalogStore>, events: Arc<EventHistoryStore>) -> Self {
        let online = Box::new(SimilarityCandidates::new(Arc::clone(&catalog)));
        Self::with_generator(catalog, events, online)
    }

    /// Builds a recommender with a custom online candidate source
    pub fn with_generator(
        catalog: Arc<CatalogStore>,
        events: Arc<EventHistoryStore>,
        online: Box<dyn CandidateGenerator>,
    ) -> Self {
        Self {
            catalog,
            events,
            online,
        }
    }

    /// Blended recommendations for a user, degrading to popularity on failure
    ///
    /// The fallback response has the same shape as a normal one; callers can
    /// only tell the difference from the zero online count.
    pub async fn recommend(&self, user_id: UserId, k: usize) -> RecommendationSet {
        match self.try_recommend(user_id, k).await {
            Ok(set) => set,
            Err(err) => {
                tracing::error!(
                    user_id,
                    error = %err,
                    "recommendation pipeline failed, serving popularity fallback"
                );
                self.fallback(k)
            }
        }
    }

    async fn try_recommend(&self, user_id: UserId, k: usize) -> AppResult<RecommendationSet> {
        // Offline candidates: personalized ranking when one exists, global
        // popularity for cold users. Cold means zero personalized rows,
        // regardless of event history.
        let offline: Vec<TrackId> = match self.catalog.offline_for_user(user_id, k) {
            Some(ranked) => {
                tracing::debug!(user_id, count = ranked.len(), "using personalized offline ranking");
                ranked
            }
            None => {
                let popular = self.catalog.top_popular(k);
                tracing::debug!(user_id, count = popular.len(), "cold user, using top popular");
                popular
            }
        };

        let history = self.events.recent(user_id, RECENT_HISTORY_WINDOW).await;
        let online = self.online.generate(&history, k / 2)?;

        let blended = blend(&offline, &online, k);
        let recommendations = enrich(&self.catalog, &blended);

        Ok(Self::with_counts(recommendations))
    }

    /// Degraded but complete response built solely from global popularity
    pub fn fallback(&self, k: usize) -> RecommendationSet {
        let blended: Vec<BlendedTrack> = self
            .catalog
            .top_popular(k)
            .into_iter()
            .map(|track_id| BlendedTrack {
                track_id,
                source: Source::Offline,
            })
            .collect();

        Self::with_counts(enrich(&self.catalog, &blended))
    }

    fn with_counts(recommendations: Vec<EnrichedRecommendation>) -> RecommendationSet {
        let offline_count = recommendations
            .iter()
            .filter(|rec| rec.source == Source::Offline)
            .count();
        let online_count = recommendations.len() - offline_count;

        RecommendationSet {
            recommendations,
            offline_count,
            online_count,
        }
    }
}
