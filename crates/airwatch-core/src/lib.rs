//! Airwatch Core - Headless library for air-quality data fetching and caching.
//!
//! This crate provides the cache-backed WAQI client used by the HTTP server.
//! It can be used programmatically without any HTTP layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use airwatch_core::{AirQualityService, WaqiClient};
//!
//! #[tokio::main]
//! async fn main() -> airwatch_core::Result<()> {
//!     let client = WaqiClient::new("my-waqi-token", None);
//!     let service = AirQualityService::new(client);
//!
//!     // First call hits the WAQI API, the second is served from cache.
//!     let payload = service.by_city("London").await?;
//!     println!("AQI: {}", payload["aqi"]);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod service;
pub mod stats;
pub mod waqi;

// Re-export commonly used types
pub use cache::ResponseCache;
pub use config::{CacheConfig, NetworkConfig, Settings};
pub use error::{AirwatchError, Result};
pub use service::AirQualityService;
pub use stats::{RequestStats, StatsSnapshot};
pub use waqi::WaqiClient;
