//! Route gateway.
//!
//! Sibling modules export subrouters over the shared `(store, config)` state;
//! this module merges them, attaches the HTTP layers, and owns the helpers
//! every profile route needs.

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Profile, ProfileSummary};
use crate::normalize::{display_name, location_label, select_latest};
use crate::store::ProfileStore;
use crate::Config;

mod health;
mod profiles;
mod timeseries;

// ---

pub fn router<S: ProfileStore>(store: S, config: Config) -> Router {
    // ---
    let cors = cors_layer(&config.cors_origins);

    Router::new()
        .merge(profiles::router::<S>())
        .merge(timeseries::router::<S>())
        .merge(health::router::<(S, Config)>())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state((store, config))
}

/// CORS for the read-only API. An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    // ---
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}

// ---

fn parse_profile_id(raw: &str) -> Result<Uuid, ApiError> {
    // ---
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::InvalidProfileId(raw.to_string()))
}

/// Validate `raw_id` and fetch the profile, mapping every failure to an [`ApiError`].
async fn load_profile<S: ProfileStore>(
    store: &S,
    raw_id: &str,
    failure_message: &'static str,
) -> Result<Profile, ApiError> {
    // ---
    let id = parse_profile_id(raw_id)?;

    store
        .fetch_by_id(id)
        .await
        .map_err(ApiError::store(failure_message))?
        .ok_or(ApiError::ProfileNotFound(id))
}

/// List/detail view of one profile.
fn summarize(profile: &Profile, default_location: &str) -> ProfileSummary {
    // ---
    ProfileSummary {
        id: profile.id,
        name: display_name(profile),
        location: location_label(profile, default_location),
        latest_coordinates: select_latest(&profile.data),
        total_data_points: profile.data.len(),
        metadata: profile.metadata_or_empty(),
    }
}
