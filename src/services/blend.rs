use std::collections::HashSet;

use crate::models::{BlendedTrack, Source, TrackId};

/// Merges offline and online candidate lists into one deduplicated ranking
///
/// Interleave-then-fill: while both lists have an element at index i, the
/// online one is emitted first, then the offline one. Whichever list is
/// longer drains afterwards, offline remainder before online remainder.
/// Duplicates keep their first occurrence and its source tag, and the result
/// is truncated to k. Pure and deterministic; never pads to k.
pub fn blend(offline: &[TrackId], online: &[TrackId], k: usize) -> Vec<BlendedTrack> {
    let paired = offline.len().min(online.len());

    let mut merged: Vec<BlendedTrack> = Vec::with_capacity(offline.len() + online.len());
    for i in 0..paired {
        merged.push(BlendedTrack { track_id: online[i], source: Source::Online });
        merged.push(BlendedTrack { track_id: offline[i], source: Source::Offline });
    }
    for &track_id in &offline[paired..] {
        merged.push(BlendedTrack { track_id, source: Source::Offline });
    }
    for &track_id in &online[paired..] {
        merged.push(BlendedTrack { track_id, source: Source::Online });
    }

    let mut seen = HashSet::new();
    merged.retain(|entry| seen.insert(entry.track_id));
    merged.truncate(k);
    merged
}
