//! Query result caching
//!
//! - `identity`: weak side table assigning ids to document instances
//! - `lru`: bounded slab-backed LRU store
//! - `shared`: mutex wrapper for multi-threaded hosts
//! - `engine`: parse, canonicalize, cache and evaluate in one call
//!
//! There is no process-wide cache; callers construct one and pass it around.

pub mod cache_entry;
pub mod cache_key;
pub mod cache_stats;
pub mod engine;
pub mod identity;
pub mod lru;
pub mod shared;

pub use cache_entry::CacheEntry;
pub use cache_key::CacheKey;
pub use cache_stats::{CacheCounters, CacheStats};
pub use engine::QueryEngine;
pub use identity::{DocumentId, DocumentIds};
pub use lru::QueryCache;
pub use shared::SharedQueryCache;
