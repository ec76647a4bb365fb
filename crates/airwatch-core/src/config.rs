//! Centralized configuration for Airwatch.
//!
//! Fixed constants live in plain structs; the only environment-supplied
//! value is the WAQI API token, read once at startup.

use crate::error::{AirwatchError, Result};
use std::time::Duration;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    /// Base URL of the WAQI feed API. `{target}/?token={token}` is appended.
    pub const WAQI_BASE_URL: &'static str = "https://api.waqi.info/feed/";
    /// Single attempt per upstream call, bounded only by this timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &'static str = "airwatch";
}

/// Cache configuration.
pub struct CacheConfig;

impl CacheConfig {
    /// Freshness window for cached upstream payloads.
    pub const TTL: Duration = Duration::from_secs(300);
}

/// Environment variable holding the WAQI API token.
pub const TOKEN_ENV_VAR: &str = "WAQI_API_TOKEN";

/// Settings read from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Secret token passed to every upstream call.
    pub api_token: String,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// Fails when `WAQI_API_TOKEN` is unset or empty so the process refuses
    /// to start without a token.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AirwatchError::Config {
                message: format!("{} must be set to a WAQI API token", TOKEN_ENV_VAR),
            })?;

        Ok(Self { api_token })
    }
}
