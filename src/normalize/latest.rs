//! Latest-Reading Selector.

use std::cmp::Reverse;

use crate::models::{NormalizedLatest, RawReading};

use super::fields::{extract_coordinates, extract_timestamp, sort_key};

// ---

/// Normalized position and time of the most recent reading.
///
/// Sorts a copy of the readings newest-first; readings without a usable
/// timestamp sort as the epoch and so sink to the end. Among equal timestamps
/// the one appearing first in the input wins. An empty slice yields all nulls.
pub fn select_latest(readings: &[RawReading]) -> NormalizedLatest {
    // ---
    let mut ordered: Vec<&RawReading> = readings.iter().collect();
    ordered.sort_by_cached_key(|r| Reverse(sort_key(r)));

    let Some(latest) = ordered.first() else {
        return NormalizedLatest::default();
    };

    let (latitude, longitude) = extract_coordinates(latest);

    NormalizedLatest {
        latitude,
        longitude,
        timestamp: extract_timestamp(latest),
    }
}
