//! `stationview`: read API over weather-station profiles.
//!
//! Profiles (a station plus its full reading history) are read from a
//! document store, normalized per request, and served as JSON for the map
//! and chart views of the web client.
//!
//! - [`normalize`] – pure field normalization, latest-reading selection, and
//!   time-series assembly
//! - [`store`] – the [`ProfileStore`] contract with Postgres and in-memory
//!   implementations
//! - [`routes`] – the Axum router gateway
//! - [`config`], [`schema`] – startup concerns used by `main.rs`

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod schema;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use models::{NormalizedLatest, NormalizedTimeSeries, Profile, RawReading};
pub use store::{MemoryProfileStore, PgProfileStore, ProfileStore, StoreError};
