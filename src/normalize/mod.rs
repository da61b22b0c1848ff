//! Normalization core.
//!
//! Turns inconsistently shaped sensor documents into the uniform latest-position
//! and time-series views served by the API. Every function here is pure and
//! synchronous: no I/O, no shared state, safe to call from any number of
//! request tasks at once.

mod fields;
mod labels;
mod latest;
mod timeseries;

pub use fields::{
    canonical_timestamp, extract_coordinates, extract_timestamp, is_truthy, sort_key,
    timestamp_millis, COORDINATES_KEY, DATE_KEY, LATITUDE_KEYS, LONGITUDE_KEYS, TIMESTAMP_KEY,
    TIMESTAMP_KEYS, TIMESTAMP_WRAPPER_KEY,
};
pub use labels::{display_name, location_label};
pub use latest::select_latest;
pub use timeseries::{assemble, sensor_keys, SENSOR_STOPLIST};
