//! Configuration loader for the `stationview` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller), so that `env::var` calls are not scattered
//! throughout the codebase.
use std::{env, net::IpAddr};

use anyhow::{anyhow, Result};

/// Parse an optional environment variable with a default value.
macro_rules! parse_env_or {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Location label used for profiles that carry none.
pub const DEFAULT_LOCATION: &str = "Sri Lanka";

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// PostgreSQL connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Address the HTTP server binds to.
    pub host: IpAddr,

    /// Port the HTTP server listens on.
    pub port: u16,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,

    /// Location label for profiles without one.
    pub default_location: String,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DATABASE_URL` – PostgreSQL connection string
///
/// Optional:
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `HOST` – bind address (default: `0.0.0.0`)
/// - `PORT` – listen port (default: 5000)
/// - `CORS_ORIGIN` – comma separated origin list (default: any origin)
/// - `DEFAULT_LOCATION` – fallback location label (default: `Sri Lanka`)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = require_env!("DATABASE_URL");
    let db_pool_max = parse_env_or!("DB_POOL_MAX", u32, 5);
    let host = parse_env_or!("HOST", IpAddr, IpAddr::from([0, 0, 0, 0]));
    let port = parse_env_or!("PORT", u16, 5000);
    let cors_origins = env::var("CORS_ORIGIN")
        .map(|raw| parse_origins(&raw))
        .unwrap_or_default();
    let default_location = env::var("DEFAULT_LOCATION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    Ok(Config {
        db_url,
        db_pool_max,
        host,
        port,
        cors_origins,
        default_location,
    })
}

/// Split a comma separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    // ---
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace the password part of a connection URL with `****`.
pub fn mask_db_url(db_url: &str) -> String {
    // ---
    let Some(at_pos) = db_url.rfind('@') else {
        return db_url.to_string();
    };
    let Some(colon_pos) = db_url[..at_pos].rfind(':') else {
        return db_url.to_string();
    };
    // `postgres://user@host` has only the scheme colon before the `@`
    if db_url[colon_pos..].starts_with("://") {
        return db_url.to_string();
    }

    format!("{}:****{}", &db_url[..colon_pos], &db_url[at_pos..])
}

impl Config {
    /// Configuration for tests and local tooling that never opens the pool.
    pub fn for_tests() -> Self {
        // ---
        Self {
            db_url: String::new(),
            db_pool_max: 1,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            cors_origins: Vec::new(),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the database password.
    pub fn log_config(&self) {
        // ---
        let origins = if self.cors_origins.is_empty() {
            "*".to_string()
        } else {
            self.cors_origins.join(", ")
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL     : {}", mask_db_url(&self.db_url));
        tracing::info!("  DB_POOL_MAX      : {}", self.db_pool_max);
        tracing::info!("  HOST             : {}", self.host);
        tracing::info!("  PORT             : {}", self.port);
        tracing::info!("  CORS_ORIGIN      : {}", origins);
        tracing::info!("  DEFAULT_LOCATION : {}", self.default_location);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_mask_db_url() {
        // ---
        assert_eq!(
            mask_db_url("postgres://weather:hunter2@db:5432/weather_db"),
            "postgres://weather:****@db:5432/weather_db"
        );
        assert_eq!(
            mask_db_url("postgres://weather@db/weather_db"),
            "postgres://weather@db/weather_db"
        );
        assert_eq!(
            mask_db_url("postgres://localhost/weather_db"),
            "postgres://localhost/weather_db"
        );
    }

    #[test]
    fn test_parse_origins() {
        // ---
        assert_eq!(
            parse_origins(" http://localhost:5173, ,https://weather.example.org "),
            vec!["http://localhost:5173", "https://weather.example.org"]
        );
        assert!(parse_origins("").is_empty());
    }
}
