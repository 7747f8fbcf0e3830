use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::{EnrichedRecommendation, TrackId, UserId};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    100
}

#[derive(Debug, Serialize)]
pub struct RecommendationStats {
    pub offline_recommendations: usize,
    pub online_recommendations: usize,
    pub total_recommendations: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: UserId,
    pub k: usize,
    pub recommendations: Vec<EnrichedRecommendation>,
    pub stats: RecommendationStats,
}

#[derive(Debug, Deserialize)]
pub struct EventParams {
    pub user_id: UserId,
    pub track_id: TrackId,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct EventsParams {
    #[serde(default = "default_events_limit")]
    pub limit: usize,
}

fn default_events_limit() -> usize {
    10
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub user_id: UserId,
    pub events: Vec<TrackId>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub data_loaded: bool,
    pub recommendations_loaded: bool,
    pub top_popular_loaded: bool,
    pub similar_loaded: bool,
    pub items_loaded: bool,
}

// Handlers

/// Blended recommendations for a user
///
/// Always responds 200: pipeline failures are absorbed by the popularity
/// fallback inside the recommender and only show up as a zero online count.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<RecommendationParams>,
) -> Json<RecommendationsResponse> {
    let set = state.recommender.recommend(user_id, params.k).await;

    tracing::info!(
        user_id,
        k = params.k,
        offline = set.offline_count,
        online = set.online_count,
        "served recommendations"
    );

    Json(RecommendationsResponse {
        user_id,
        k: params.k,
        stats: RecommendationStats {
            offline_recommendations: set.offline_count,
            online_recommendations: set.online_count,
            total_recommendations: set.recommendations.len(),
        },
        recommendations: set.recommendations,
    })
}

/// Records one play event
pub async fn add_event(
    State(state): State<AppState>,
    Query(params): Query<EventParams>,
) -> Json<EventResponse> {
    state.events.record(params.user_id, params.track_id).await;
    tracing::info!(user_id = params.user_id, track_id = params.track_id, "event recorded");

    Json(EventResponse {
        status: "ok",
        message: "Event added",
    })
}

/// A user's recent play events, newest first
pub async fn get_events(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<EventsParams>,
) -> Json<EventsResponse> {
    let events = state.events.recent(user_id, params.limit).await;
    Json(EventsResponse { user_id, events })
}

/// Health check endpoint
///
/// Bootstrap is all-or-nothing: a serving process always holds all four
/// datasets, so the per-dataset flags report that invariant.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        data_loaded: true,
        recommendations_loaded: true,
        top_popular_loaded: true,
        similar_loaded: true,
        items_loaded: true,
    })
}
