//! Cache statistics and counters

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Running counters owned by a cache
#[derive(Debug, Default)]
pub struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheCounters {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Hits over lookups, 0.0 before the first lookup
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else if total > (1u64 << 53) {
            let scaled = (u128::from(hits) * 1_000_000_000) / u128::from(total);
            (scaled as f64) / 1_000_000_000.0
        } else {
            (hits as f64) / (total as f64)
        }
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time view of a cache
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Live entries
    pub size: usize,
    pub capacity: usize,
    /// Sum of hit counts over live entries
    pub total_hits: u64,
    /// `total_hits / size`, 0.0 when empty
    pub average_hits: f64,
    /// Cumulative hits over cumulative lookups
    pub hit_rate: f64,
    pub misses: u64,
    pub evictions: u64,
}
