//! Time-series endpoint feeding the per-station charts.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{NormalizedTimeSeries, TimeSeriesResponse};
use crate::normalize::{assemble, display_name, location_label};
use crate::store::ProfileStore;
use crate::Config;

use super::load_profile;

// ---

pub fn router<S: ProfileStore>() -> Router<(S, Config)> {
    // ---
    Router::new().route("/api/profiles/{id}/timeseries", get(handler::<S>))
}

/// Chronological readings of one profile for charting.
async fn handler<S: ProfileStore>(
    Path(id): Path<String>,
    State((store, config)): State<(S, Config)>,
) -> Result<Json<TimeSeriesResponse>, ApiError> {
    // ---
    info!("GET /api/profiles/{}/timeseries", id);

    let profile = load_profile(&store, &id, "Error fetching time series data").await?;
    let NormalizedTimeSeries { series, sensors } = assemble(&profile.data);

    debug!(
        "GET /api/profiles/{}/timeseries - {} points, sensors {:?}",
        profile.id,
        series.len(),
        sensors
    );
    Ok(Json(TimeSeriesResponse {
        success: true,
        profile_id: profile.id,
        profile_name: display_name(&profile),
        location: location_label(&profile, &config.default_location),
        data_points: series.len(),
        sensors,
        data: series,
        metadata: profile.metadata_or_empty(),
    }))
}
