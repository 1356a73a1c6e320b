//! Cached query result with access metadata

use std::time::{Duration, Instant};

/// Cached evaluation result
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// Insertion timestamp
    pub created_at: Instant,
    /// Last `get` or `set` touching this entry
    pub last_access: Instant,
    /// Number of `get` hits since insertion
    pub hit_count: u64,
}

impl<V> CacheEntry<V> {
    #[must_use]
    pub fn new(value: V) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            last_access: now,
            hit_count: 0,
        }
    }

    /// Record a cache hit and update access time
    pub fn record_hit(&mut self) {
        self.last_access = Instant::now();
        self.hit_count += 1;
    }

    /// Replace the value, keeping the creation time and hit count
    pub fn replace(&mut self, value: V) {
        self.value = value;
        self.last_access = Instant::now();
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
