//! Process-wide request counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counters for the life of the process.
///
/// Reset only by restart. Shared via `Arc` between the cache and the HTTP
/// layer; every increment is a relaxed atomic add.
#[derive(Debug, Default)]
pub struct RequestStats {
    total_requests: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    errors: AtomicU64,
}

/// Point-in-time view of the counters, shaped for the `/api/stats` payload.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub errors: u64,
    /// Hits over cache lookups, e.g. `"66.7%"`. `"0.0%"` before any lookup.
    pub cache_hit_rate: String,
}

impl RequestStats {
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let cache_misses = self.cache_misses.load(Ordering::Relaxed);
        let lookups = cache_hits + cache_misses;
        let rate = if lookups == 0 {
            0.0
        } else {
            cache_hits as f64 * 100.0 / lookups as f64
        };

        StatsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            cache_hits,
            cache_misses,
            errors: self.errors.load(Ordering::Relaxed),
            cache_hit_rate: format!("{:.1}%", rate),
        }
    }
}
