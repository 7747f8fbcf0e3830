use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque track identifier, used as a map/set key throughout
pub type TrackId = u64;

/// Opaque user identifier
pub type UserId = u64;

/// Where a recommendation came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Precomputed per-user ranking (or the popularity table standing in for it)
    Offline,
    /// Derived live from recent play history and the similarity table
    Online,
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Offline => write!(f, "offline"),
            Source::Online => write!(f, "online"),
        }
    }
}

// ============================================================================
// Catalog dataset rows
// ============================================================================

/// One row of the per-user offline recommendations dataset
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRow {
    pub user_id: UserId,
    pub track_id: TrackId,
    /// Relevance rank, 1 = best; unique per user, may be sparse
    pub rank: u32,
}

/// One row of the global popularity dataset
#[derive(Debug, Clone, Deserialize)]
pub struct PopularityRow {
    pub track_id: TrackId,
    pub popularity_rank: u32,
}

/// One row of the similarity dataset
///
/// Only the track id column is consumed; any other columns the offline job
/// wrote alongside it are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityRow {
    pub track_id: TrackId,
}

/// One row of the track metadata dataset
///
/// Textual fields may arrive wrapped in list-literal artifacts from the
/// offline export (e.g. `["Bohemian Rhapsody"]`); the enricher strips those.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRow {
    pub track_id: TrackId,
    pub track_name: String,
    pub artist_name: String,
    #[serde(rename = "genre_name")]
    pub genre: String,
    pub album_name: String,
}

// ============================================================================
// Request-scoped output entities
// ============================================================================

/// A track id paired with the source that proposed it, before enrichment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendedTrack {
    pub track_id: TrackId,
    pub source: Source,
}

/// A blended recommendation joined with track metadata, as returned to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedRecommendation {
    pub track_id: TrackId,
    pub track_name: String,
    pub artist_name: String,
    pub genre: String,
    pub album_name: String,
    #[serde(rename = "recommendation_type")]
    pub source: Source,
}
