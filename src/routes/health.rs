//! API health check endpoint.
//!
//! Defines the `/api/health` route used by orchestrators and the web client to
//! verify that the service is running and able to respond to HTTP requests.
//! The gateway (`mod.rs`) merges this subrouter into the top-level API router.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/api/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Handle `GET /api/health`.
///
/// Does not touch the store.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Weather Dashboard API is running",
    })
}

/// Create a subrouter containing the `/api/health` route.
///
/// Generic over the application state so it merges with the gateway router
/// whatever store type the state carries.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/health", get(health))
}
