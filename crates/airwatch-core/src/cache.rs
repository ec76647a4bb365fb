//! In-memory response cache with lazy expiry.
//!
//! One cache is shared by every request the server handles. Entries are
//! never swept: an entry older than the TTL is treated as absent on lookup
//! and overwritten by the next successful fetch of the same key. Key
//! cardinality is bounded by the distinct cities and coordinates queried.

use crate::stats::RequestStats;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// A cached upstream payload and the moment it was stored.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// Process-wide mapping from a query key to the last successful payload.
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    stats: Arc<RequestStats>,
}

impl ResponseCache {
    pub fn new(ttl: Duration, stats: Arc<RequestStats>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            stats,
        }
    }

    /// Cache key for a by-city query.
    pub fn city_key(city: &str) -> String {
        format!("city:{city}")
    }

    /// Cache key for a by-coordinates query.
    ///
    /// The disjoint `city:` / `coords:` prefixes keep the two key families
    /// from ever colliding.
    pub fn coords_key(lat: f64, lon: f64) -> String {
        format!("coords:{lat}:{lon}")
    }

    /// Look up a fresh entry, recording a cache hit or miss.
    ///
    /// Returns `None` for missing and for expired entries alike; expired
    /// entries stay in the map until overwritten.
    pub fn get(&self, key: &str) -> Option<Value> {
        let payload = self
            .lock()
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.payload.clone());

        match payload {
            Some(value) => {
                debug!("cache hit for {key}");
                self.stats.record_hit();
                Some(value)
            }
            None => {
                debug!("cache miss for {key}");
                self.stats.record_miss();
                None
            }
        }
    }

    /// Store or overwrite the entry for `key`, stamped with the current time.
    pub fn set(&self, key: &str, payload: Value) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                payload,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, counting logically expired ones.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // The guard is never held across an await.
        self.entries.lock().expect("cache lock poisoned")
    }
}
