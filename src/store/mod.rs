//! Document store adapter.
//!
//! The HTTP layer only sees the [`ProfileStore`] contract. The concrete store
//! owns its resources (the Postgres pool, or a shared in-memory list) and is
//! handed to the router at construction; the normalization core never touches
//! it.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Profile, RawReading};

mod memory;
mod postgres;

pub use memory::MemoryProfileStore;
pub use postgres::PgProfileStore;

// ---

#[derive(Debug, Error)]
pub enum StoreError {
    // ---
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored profile whose `data` is not a list of reading objects.
    #[error("profile {id} is malformed: {reason}")]
    MalformedDocument { id: Uuid, reason: String },
}

/// Read access to weather-station profiles.
pub trait ProfileStore: Clone + Send + Sync + 'static {
    // ---
    /// Every profile, in store order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Profile>, StoreError>> + Send;

    /// One profile, `None` when no profile has this id.
    fn fetch_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, StoreError>> + Send;
}

/// Split a stored `data` document into readings.
///
/// `null` is an empty history; anything other than an array of objects is a
/// malformed document.
pub fn readings_from_document(id: Uuid, data: Value) -> Result<Vec<RawReading>, StoreError> {
    // ---
    let items = match data {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(StoreError::MalformedDocument {
                id,
                reason: format!("`data` must be an array, got {}", json_kind(&other)),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(reading) => Ok(reading),
            other => Err(StoreError::MalformedDocument {
                id,
                reason: format!("reading {index} must be an object, got {}", json_kind(&other)),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    // ---
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn test_readings_from_array() {
        // ---
        let id = Uuid::new_v4();
        let readings = readings_from_document(
            id,
            json!([{"timestamp": "2022-01-01", "temperature": 18}, {"humidity": 50}]),
        )
        .unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1]["humidity"], json!(50));
    }

    #[test]
    fn test_null_data_is_empty() {
        // ---
        let readings = readings_from_document(Uuid::new_v4(), Value::Null).unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_non_array_data_is_malformed() {
        // ---
        let id = Uuid::new_v4();
        let err = readings_from_document(id, json!({"timestamp": "2022-01-01"})).unwrap_err();

        match err {
            StoreError::MalformedDocument { id: bad, reason } => {
                assert_eq!(bad, id);
                assert!(reason.contains("object"), "unexpected reason: {reason}");
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_reading_is_malformed() {
        // ---
        let err = readings_from_document(Uuid::new_v4(), json!([{"temp": 1}, 42])).unwrap_err();
        assert!(err.to_string().contains("reading 1"));
    }
}
