//! Mutex-guarded cache for multi-threaded hosts

use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    cache_key::CacheKey, cache_stats::CacheStats, identity::DocumentIds, lru::QueryCache,
};
use crate::core_evaluator::QueryOutput;

struct CacheState<D> {
    ids: DocumentIds<D>,
    entries: QueryCache<QueryOutput<D>>,
}

/// Query result cache shared between threads
///
/// The identity table and the LRU store sit behind one mutex. Lock scopes
/// never span an evaluation.
pub struct SharedQueryCache<D> {
    state: Mutex<CacheState<D>>,
}

impl<D: Clone> SharedQueryCache<D> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                ids: DocumentIds::new(),
                entries: QueryCache::new(capacity),
            }),
        }
    }

    /// Key scoping `canonical_path` to this document instance
    pub fn key_for(&self, document: &Arc<D>, canonical_path: &str) -> CacheKey {
        let id = self.lock().ids.id_of(document);
        CacheKey::new(id, canonical_path)
    }

    pub fn get(&self, key: &CacheKey) -> Option<QueryOutput<D>> {
        self.lock().entries.get(key)
    }

    pub fn set(&self, key: CacheKey, value: QueryOutput<D>) {
        self.lock().entries.set(key, value);
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().entries.stats()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Acquire the state, dropping all entries if a holder panicked mid-update
    fn lock(&self) -> MutexGuard<'_, CacheState<D>> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("query cache lock poisoned, clearing cached results");
                self.state.clear_poison();
                let mut guard = poisoned.into_inner();
                guard.entries.clear();
                guard
            }
        }
    }
}

impl<D> std::fmt::Debug for SharedQueryCache<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedQueryCache").finish_non_exhaustive()
    }
}
