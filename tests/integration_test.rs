//! Smoke tests against a running server backed by a real database.
//!
//! Ignored by default. Run with `BASE_URL` pointing at the service:
//! `BASE_URL=http://localhost:5000 cargo test -- --ignored`

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestCoordinates {
    latitude: Option<f64>,
    longitude: Option<f64>,
    timestamp: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSummary {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    latest_coordinates: LatestCoordinates,
    total_data_points: usize,
}

#[derive(Debug, Deserialize)]
struct ProfileList {
    success: bool,
    count: usize,
    data: Vec<ProfileSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeSeries {
    success: bool,
    data_points: usize,
    sensors: Vec<String>,
    data: Vec<serde_json::Map<String, Value>>,
}

fn base_url() -> String {
    std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".into())
}

#[tokio::test]
#[ignore = "needs a running server and database"]
async fn profiles_endpoint_lists_stations() -> Result<()> {
    // ---
    let url = format!("{}/api/profiles", base_url());
    let list: ProfileList = Client::new().get(&url).send().await?.json().await?;

    assert!(list.success);
    assert_eq!(list.count, list.data.len());

    for profile in &list.data {
        // ---
        assert!(!profile.id.is_empty(), "profile id should not be empty");
        assert!(!profile.name.is_empty(), "profile name should not be empty");

        // Stations without readings have no latest position
        if profile.total_data_points == 0 {
            assert!(profile.latest_coordinates.latitude.is_none());
            assert!(profile.latest_coordinates.longitude.is_none());
            assert!(profile.latest_coordinates.timestamp.is_none());
        }
    }

    Ok(())
}

#[tokio::test]
#[ignore = "needs a running server and database"]
async fn timeseries_endpoint_is_chronological() -> Result<()> {
    // ---
    let client = Client::new();
    let base = base_url();

    let list: ProfileList = client
        .get(format!("{}/api/profiles", base))
        .send()
        .await?
        .json()
        .await?;

    for profile in list.data.iter().take(5) {
        // ---
        let url = format!("{}/api/profiles/{}/timeseries", base, profile.id);
        let ts: TimeSeries = client.get(&url).send().await?.json().await?;

        assert!(ts.success);
        assert_eq!(ts.data_points, profile.total_data_points);
        assert_eq!(ts.data_points, ts.data.len());
        if ts.data.is_empty() {
            assert!(ts.sensors.is_empty());
        }

        // Canonical ISO-8601 UTC strings sort lexicographically
        let stamps: Vec<&str> = ts
            .data
            .iter()
            .filter_map(|r| r.get("timestamp").and_then(Value::as_str))
            .collect();
        assert!(
            stamps.windows(2).all(|w| w[0] <= w[1]),
            "time series for {} is not sorted",
            profile.id
        );
    }

    Ok(())
}

#[tokio::test]
#[ignore = "needs a running server and database"]
async fn invalid_profile_id_is_rejected() -> Result<()> {
    // ---
    let url = format!("{}/api/profiles/not-an-id", base_url());
    let response = Client::new().get(&url).send().await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);

    Ok(())
}
