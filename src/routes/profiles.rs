//! Profile list and detail endpoints.
//!
//! Each profile is summarized with its latest normalized position and its
//! reading count.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{ProfileDetailResponse, ProfileList, ProfileSummary};
use crate::store::ProfileStore;
use crate::Config;

use super::{load_profile, summarize};

// ---

pub fn router<S: ProfileStore>() -> Router<(S, Config)> {
    // ---
    Router::new()
        .route("/api/profiles", get(list_profiles::<S>))
        .route("/api/profiles/{id}", get(get_profile::<S>))
}

/// Every profile with its latest position and reading count.
async fn list_profiles<S: ProfileStore>(
    State((store, config)): State<(S, Config)>,
) -> Result<Json<ProfileList>, ApiError> {
    // ---
    info!("GET /api/profiles");

    let profiles = store
        .fetch_all()
        .await
        .map_err(ApiError::store("Error fetching profiles"))?;

    let data: Vec<ProfileSummary> = profiles
        .iter()
        .map(|profile| summarize(profile, &config.default_location))
        .collect();

    debug!("GET /api/profiles - Returning {} profiles", data.len());
    Ok(Json(ProfileList {
        success: true,
        count: data.len(),
        data,
    }))
}

async fn get_profile<S: ProfileStore>(
    Path(id): Path<String>,
    State((store, config)): State<(S, Config)>,
) -> Result<Json<ProfileDetailResponse>, ApiError> {
    // ---
    info!("GET /api/profiles/{}", id);

    let profile = load_profile(&store, &id, "Error fetching profile").await?;

    debug!(
        "GET /api/profiles/{} - {} readings",
        profile.id,
        profile.data.len()
    );
    Ok(Json(ProfileDetailResponse {
        success: true,
        data: summarize(&profile, &config.default_location),
    }))
}
