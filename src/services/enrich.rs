use crate::models::{BlendedTrack, EnrichedRecommendation, Source, TrackId};
use crate::services::catalog::CatalogStore;

/// Joins blended track ids against catalog metadata
///
/// Output has the same length and order as the input. Missing metadata is a
/// normal case handled with placeholder fields, never an error.
pub fn enrich(catalog: &CatalogStore, blended: &[BlendedTrack]) -> Vec<EnrichedRecommendation> {
    blended
        .iter()
        .map(|entry| match catalog.item(entry.track_id) {
            Some(item) => EnrichedRecommendation {
                track_id: entry.track_id,
                track_name: normalize_field(&item.track_name),
                artist_name: normalize_field(&item.artist_name),
                genre: normalize_field(&item.genre),
                album_name: normalize_field(&item.album_name),
                source: entry.source,
            },
            None => unknown_track(entry.track_id, entry.source),
        })
        .collect()
}

fn unknown_track(track_id: TrackId, source: Source) -> EnrichedRecommendation {
    EnrichedRecommendation {
        track_id,
        track_name: format!("Unknown track ({})", track_id),
        artist_name: "Unknown artist".to_string(),
        genre: "Unknown".to_string(),
        album_name: "Unknown".to_string(),
        source,
    }
}

/// Strips list-literal decoration left behind by the offline export
///
/// Some exports store single-element lists stringified, e.g. `["Abbey Road"]`
/// or `['Queen']`. Values that are not list-shaped pass through untouched.
fn normalize_field(raw: &str) -> String {
    if raw.starts_with('[') && raw.ends_with(']') {
        raw.trim_matches(|c| matches!(c, '[' | ']' | '\'' | '"'))
            .to_string()
    } else {
        raw.to_string()
    }
}
