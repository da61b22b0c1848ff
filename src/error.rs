//! HTTP-facing error type.
//!
//! Every failure a route can hit maps to one JSON body of the shape
//! `{success: false, message[, error]}`; the status code tells the client
//! which kind it was.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::store::StoreError;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    // ---
    /// The path segment is not a valid profile id.
    #[error("Invalid profile ID")]
    InvalidProfileId(String),

    #[error("Profile not found")]
    ProfileNotFound(Uuid),

    /// The store failed; `message` names the operation for the client.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that tags a store failure with a client message.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        // ---
        move |source| ApiError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            ApiError::InvalidProfileId(_) => StatusCode::BAD_REQUEST,
            ApiError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();

        let body = match &self {
            ApiError::InvalidProfileId(raw) => {
                warn!("Rejected profile id {:?}", raw);
                json!({ "success": false, "message": self.to_string() })
            }
            ApiError::ProfileNotFound(id) => {
                warn!("Profile {} not found", id);
                json!({ "success": false, "message": self.to_string() })
            }
            ApiError::Store { message, source } => {
                error!("{}: {}", message, source);
                json!({
                    "success": false,
                    "message": message,
                    "error": source.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
