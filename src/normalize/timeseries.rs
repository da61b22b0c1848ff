//! Time-Series Assembler.
//!
//! Normalization here is additive: every original field of a reading is kept,
//! the canonical timestamp and flattened coordinates are written on top.

use serde_json::Value;

use crate::models::{NormalizedTimeSeries, RawReading};

use super::fields::{
    canonical_timestamp, extract_timestamp, sort_key, COORDINATES_KEY, LATITUDE_KEYS,
    LONGITUDE_KEYS, TIMESTAMP_KEY,
};

// ---

/// Structural keys that are never reported as sensors.
pub const SENSOR_STOPLIST: [&str; 11] = [
    "timestamp",
    "date",
    "latitude",
    "longitude",
    "lat",
    "lng",
    "lon",
    "coordinates",
    "_id",
    "createAt",
    "metadata",
];

/// Chronological, normalized copy of `readings` plus its sensor keys.
///
/// Sensor keys come from the first reading of the sorted series only. Keys that
/// first appear in later readings stay in the data but are not listed.
pub fn assemble(readings: &[RawReading]) -> NormalizedTimeSeries {
    // ---
    let mut ordered: Vec<&RawReading> = readings.iter().collect();
    ordered.sort_by_cached_key(|r| sort_key(r));

    let series: Vec<RawReading> = ordered.into_iter().map(normalize_reading).collect();
    let sensors = series.first().map(sensor_keys).unwrap_or_default();

    NormalizedTimeSeries { series, sensors }
}

fn normalize_reading(reading: &RawReading) -> RawReading {
    // ---
    let mut normalized = reading.clone();

    if let Some(timestamp) = extract_timestamp(reading) {
        normalized.insert(TIMESTAMP_KEY.to_string(), canonical_timestamp(&timestamp));
    }

    if let Some(pair) = reading.get(COORDINATES_KEY).and_then(Value::as_array) {
        let latitude = pair.first().cloned().unwrap_or(Value::Null);
        let longitude = pair.get(1).cloned().unwrap_or(Value::Null);
        normalized.insert(LATITUDE_KEYS[0].to_string(), latitude);
        normalized.insert(LONGITUDE_KEYS[0].to_string(), longitude);
    }

    normalized
}

/// Non-structural keys of one reading, in document order.
pub fn sensor_keys(reading: &RawReading) -> Vec<String> {
    // ---
    reading
        .keys()
        .filter(|key| !SENSOR_STOPLIST.contains(&key.as_str()))
        .cloned()
        .collect()
}
