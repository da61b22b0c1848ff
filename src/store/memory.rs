//! In-memory profile store.

use std::sync::Arc;

use uuid::Uuid;

use crate::models::Profile;

use super::{ProfileStore, StoreError};

// ---

/// Fixed set of profiles shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<Vec<Profile>>,
}

impl MemoryProfileStore {
    // ---
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    // ---
    async fn fetch_all(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self.profiles.as_ref().clone())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }
}
