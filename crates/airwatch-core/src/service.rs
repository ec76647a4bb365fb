//! Request orchestration: cache lookup, upstream fetch, store-through.

use crate::cache::ResponseCache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::stats::RequestStats;
use crate::waqi::WaqiClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Cache-backed AQI fetcher — the facade the HTTP layer talks to.
///
/// Created once at process start and shared across all requests for the
/// process lifetime. Concurrent misses for the same key may each call
/// upstream and overwrite the entry; the last write wins.
pub struct AirQualityService {
    cache: ResponseCache,
    client: WaqiClient,
    stats: Arc<RequestStats>,
}

impl AirQualityService {
    pub fn new(client: WaqiClient) -> Self {
        Self::with_cache_ttl(client, CacheConfig::TTL)
    }

    /// Create with a custom cache TTL (tests shrink it to exercise expiry).
    pub fn with_cache_ttl(client: WaqiClient, ttl: Duration) -> Self {
        let stats = Arc::new(RequestStats::default());
        Self {
            cache: ResponseCache::new(ttl, Arc::clone(&stats)),
            client,
            stats,
        }
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    /// Number of cached entries, for the health payload.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// AQI payload for a city, served from cache when fresh.
    ///
    /// Failures propagate to the caller; nothing is cached on error.
    pub async fn by_city(&self, city: &str) -> Result<Value> {
        self.stats.record_request();

        let key = ResponseCache::city_key(city);
        if let Some(payload) = self.cache.get(&key) {
            return Ok(payload);
        }

        match self.client.fetch_by_city(city).await {
            Ok(payload) => {
                self.cache.set(&key, payload.clone());
                Ok(payload)
            }
            Err(err) => {
                self.stats.record_error();
                Err(err)
            }
        }
    }

    /// AQI payload for a coordinate pair, served from cache when fresh.
    pub async fn by_coords(&self, lat: f64, lon: f64) -> Result<Value> {
        self.stats.record_request();

        let key = ResponseCache::coords_key(lat, lon);
        if let Some(payload) = self.cache.get(&key) {
            return Ok(payload);
        }

        match self.client.fetch_by_coords(lat, lon).await {
            Ok(payload) => {
                self.cache.set(&key, payload.clone());
                Ok(payload)
            }
            Err(err) => {
                self.stats.record_error();
                Err(err)
            }
        }
    }
}
