//! Data models for the station view service.
//!
//! Profiles come out of the store with their readings still in whatever shape
//! the importer left them; everything the HTTP layer sends back is derived
//! per request by [`crate::normalize`].

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

// ---

/// One sensor sample exactly as stored. No fixed schema.
pub type RawReading = Map<String, Value>;

/// A weather station: identity plus its full reading history.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    // ---
    pub id: Uuid,
    pub name: Option<String>,
    pub profile_name: Option<String>,
    pub location: Option<String>,
    pub data: Vec<RawReading>,
    pub metadata: Option<Map<String, Value>>,
}

impl Profile {
    /// Create a profile with no readings and no labels.
    pub fn new(id: Uuid) -> Self {
        // ---
        Self {
            id,
            name: None,
            profile_name: None,
            location: None,
            data: Vec::new(),
            metadata: None,
        }
    }

    /// Metadata mapping, `{}` when the document has none.
    pub fn metadata_or_empty(&self) -> Map<String, Value> {
        self.metadata.clone().unwrap_or_default()
    }
}

/// Position and time of a profile's most recent reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedLatest {
    // ---
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<Value>,
}

/// Chronologically ordered readings plus the sensor keys they carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTimeSeries {
    // ---
    pub series: Vec<RawReading>,
    pub sensors: Vec<String>,
}

// --- Response bodies

/// One entry of `GET /api/profiles`, also the body of `GET /api/profiles/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    // ---
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub latest_coordinates: NormalizedLatest,
    pub total_data_points: usize,
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct ProfileList {
    // ---
    pub success: bool,
    pub count: usize,
    pub data: Vec<ProfileSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    // ---
    pub success: bool,
    pub data: ProfileSummary,
}

/// Body of `GET /api/profiles/{id}/timeseries`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    // ---
    pub success: bool,
    pub profile_id: Uuid,
    pub profile_name: String,
    pub location: String,
    pub data_points: usize,
    pub sensors: Vec<String>,
    pub data: Vec<RawReading>,
    pub metadata: Map<String, Value>,
}
