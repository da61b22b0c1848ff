//! Field Normalizer: canonical timestamp and position out of a raw reading.
//!
//! Sensor documents were written by several generations of importers, so the
//! same concept lives under different keys. Each logical field is resolved
//! from an ordered alias list with first-present-wins, where "present" means
//! truthy in the sense the stored documents were produced with: `null`,
//! `false`, `0`, and `""` all count as missing.
//!
//! Nothing in here fails. Unusable input degrades to `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::models::RawReading;

// ---

/// Key holding the reading time (plain value or a `{"$date": ...}` wrapper).
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Generic date key used by older documents.
pub const DATE_KEY: &str = "date";

/// Inner key of an extended-JSON date wrapper.
pub const TIMESTAMP_WRAPPER_KEY: &str = "$date";

/// Inner key of an extended-JSON 64-bit integer wrapper.
pub const NUMBER_LONG_KEY: &str = "$numberLong";

/// Direct timestamp keys, in priority order, after the wrapped form.
pub const TIMESTAMP_KEYS: [&str; 2] = [TIMESTAMP_KEY, DATE_KEY];

/// Ordered `[lat, lng]` pair.
pub const COORDINATES_KEY: &str = "coordinates";

/// Latitude aliases consulted when `coordinates[0]` is missing.
pub const LATITUDE_KEYS: [&str; 2] = ["latitude", "lat"];

/// Longitude aliases consulted when `coordinates[1]` is missing.
pub const LONGITUDE_KEYS: [&str; 3] = ["longitude", "lng", "lon"];

/// Naive layouts accepted for timestamps without an offset (read as UTC).
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---

/// Whether a JSON value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    // ---
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve the reading time: `timestamp.$date`, then `timestamp`, then `date`.
///
/// The first truthy candidate is returned as stored, without type checks.
pub fn extract_timestamp(reading: &RawReading) -> Option<Value> {
    // ---
    let wrapped = reading
        .get(TIMESTAMP_KEY)
        .and_then(|ts| ts.get(TIMESTAMP_WRAPPER_KEY));

    std::iter::once(wrapped)
        .chain(TIMESTAMP_KEYS.iter().map(|key| reading.get(*key)))
        .flatten()
        .find(|value| is_truthy(value))
        .cloned()
}

/// Resolve `(latitude, longitude)`.
///
/// `coordinates[0]` / `coordinates[1]` win when usable, else the named aliases
/// are tried in order. A coordinate of exactly `0` is treated as missing.
pub fn extract_coordinates(reading: &RawReading) -> (Option<f64>, Option<f64>) {
    // ---
    let pair = reading.get(COORDINATES_KEY).and_then(Value::as_array);

    let latitude = first_coordinate(pair.and_then(|p| p.first()), reading, &LATITUDE_KEYS);
    let longitude = first_coordinate(pair.and_then(|p| p.get(1)), reading, &LONGITUDE_KEYS);

    (latitude, longitude)
}

fn first_coordinate(
    pair_entry: Option<&Value>,
    reading: &RawReading,
    aliases: &[&str],
) -> Option<f64> {
    // ---
    pair_entry
        .into_iter()
        .chain(aliases.iter().filter_map(|key| reading.get(*key)))
        .find_map(as_coordinate)
}

/// Numeric value of a coordinate candidate; zero and non-numbers are absent.
fn as_coordinate(value: &Value) -> Option<f64> {
    // ---
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|f| *f != 0.0 && f.is_finite())
}

/// Epoch milliseconds of an extracted timestamp, if it can be read as one.
pub fn timestamp_millis(value: &Value) -> Option<i64> {
    // ---
    match value {
        Value::String(s) => parse_datetime_millis(s),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::Object(map) => {
            if let Some(long) = map.get(NUMBER_LONG_KEY) {
                match long {
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    other => other.as_i64(),
                }
            } else {
                map.get(TIMESTAMP_WRAPPER_KEY).and_then(timestamp_millis)
            }
        }
        _ => None,
    }
}

fn parse_datetime_millis(raw: &str) -> Option<i64> {
    // ---
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Ordering key for a reading; no usable timestamp sorts as the epoch.
pub fn sort_key(reading: &RawReading) -> i64 {
    // ---
    extract_timestamp(reading)
        .as_ref()
        .and_then(timestamp_millis)
        .unwrap_or(0)
}

/// Single comparable form of a timestamp: ISO-8601 UTC with milliseconds.
///
/// Values that cannot be read as a time are passed through unchanged.
pub fn canonical_timestamp(value: &Value) -> Value {
    // ---
    timestamp_millis(value)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)))
        .unwrap_or_else(|| value.clone())
}
