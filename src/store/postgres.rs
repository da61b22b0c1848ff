//! Postgres-backed profile store.
//!
//! Profiles live in the `profiles` table created by [`crate::schema`]; the
//! reading history and metadata are stored as JSONB documents untouched.

use serde_json::Value;
use sqlx::{types::Json, PgPool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::Profile;

use super::{readings_from_document, ProfileStore, StoreError};

// ---

const SELECT_ALL_PROFILES: &str = r#"
    SELECT id, name, profile_name, location, data, metadata
      FROM profiles
     ORDER BY created_at, id
"#;

const SELECT_PROFILE_BY_ID: &str = r#"
    SELECT id, name, profile_name, location, data, metadata
      FROM profiles
     WHERE id = $1
"#;

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    // ---
    id: Uuid,
    name: Option<String>,
    profile_name: Option<String>,
    location: Option<String>,
    data: Json<Value>,
    metadata: Option<Json<Value>>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = StoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        // ---
        let data = readings_from_document(row.id, row.data.0)?;

        let metadata = match row.metadata.map(|m| m.0) {
            Some(Value::Object(map)) => Some(map),
            None | Some(Value::Null) => None,
            Some(other) => {
                warn!("Ignoring non-object metadata on profile {}: {}", row.id, other);
                None
            }
        };

        Ok(Profile {
            id: row.id,
            name: row.name,
            profile_name: row.profile_name,
            location: row.location,
            data,
            metadata,
        })
    }
}

/// [`ProfileStore`] over an injected connection pool.
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    // ---
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for startup tasks and shutdown.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ProfileStore for PgProfileStore {
    // ---
    async fn fetch_all(&self) -> Result<Vec<Profile>, StoreError> {
        // ---
        let rows: Vec<ProfileRow> = sqlx::query_as(SELECT_ALL_PROFILES)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} profile rows", rows.len());
        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        // ---
        let row: Option<ProfileRow> = sqlx::query_as(SELECT_PROFILE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!("Profile {} found: {}", id, row.is_some());
        row.map(Profile::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    fn row(data: Value, metadata: Option<Value>) -> ProfileRow {
        // ---
        ProfileRow {
            id: Uuid::new_v4(),
            name: Some("Kalagunaya Profile 1".to_string()),
            profile_name: None,
            location: Some("Nuwara Eliya".to_string()),
            data: Json(data),
            metadata: metadata.map(Json),
        }
    }

    #[test]
    fn test_row_into_profile() {
        // ---
        let source = row(
            json!([{"timestamp": "2022-10-03T13:19:23.000Z", "temperature": 27.3}]),
            Some(json!({"source": "Kalagunaya Weather Station"})),
        );
        let id = source.id;

        let profile = Profile::try_from(source).unwrap();

        assert_eq!(profile.id, id);
        assert_eq!(profile.name.as_deref(), Some("Kalagunaya Profile 1"));
        assert_eq!(profile.location.as_deref(), Some("Nuwara Eliya"));
        assert_eq!(profile.data.len(), 1);
        assert_eq!(profile.data[0]["temperature"], json!(27.3));
        assert_eq!(
            profile.metadata.unwrap()["source"],
            json!("Kalagunaya Weather Station")
        );
    }

    #[test]
    fn test_missing_or_null_metadata_is_none() {
        // ---
        let absent = Profile::try_from(row(json!([]), None)).unwrap();
        assert!(absent.metadata.is_none());

        let null = Profile::try_from(row(json!([]), Some(Value::Null))).unwrap();
        assert!(null.metadata.is_none());
    }

    #[test]
    fn test_non_object_metadata_is_dropped() {
        // ---
        let profile = Profile::try_from(row(json!([]), Some(json!(["not", "a", "map"])))).unwrap();

        assert!(profile.metadata.is_none());
        assert!(profile.metadata_or_empty().is_empty());
    }

    #[test]
    fn test_malformed_data_is_rejected() {
        // ---
        let source = row(json!("2022-10-03"), None);
        let id = source.id;

        match Profile::try_from(source) {
            Err(StoreError::MalformedDocument { id: bad, .. }) => assert_eq!(bad, id),
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }
}
