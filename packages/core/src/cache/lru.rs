//! Bounded LRU result cache
//!
//! Entries live in a slab; an intrusive doubly-linked list threaded through
//! the slab orders them by recency and a hash index maps keys to slots.
//! Every `get` hit and every `set` moves the entry to the front; inserting
//! at capacity reuses the slot of the single least recently used entry.

use hashbrown::HashMap;

use super::{
    cache_entry::CacheEntry,
    cache_key::CacheKey,
    cache_stats::{CacheCounters, CacheStats},
};

struct Slot<V> {
    key: CacheKey,
    entry: CacheEntry<V>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU map from [`CacheKey`] to cached values
pub struct QueryCache<V> {
    slots: Vec<Slot<V>>,
    index: HashMap<CacheKey, usize>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
    capacity: usize,
    counters: CacheCounters,
}

impl<V: Clone> QueryCache<V> {
    /// Create a cache holding at most `capacity` entries
    ///
    /// A capacity of zero disables caching: `set` stores nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(1024)),
            index: HashMap::with_capacity(capacity.min(1024)),
            head: None,
            tail: None,
            capacity,
            counters: CacheCounters::default(),
        }
    }

    /// Look up `key`, promoting it on a hit
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        let Some(&slot) = self.index.get(key) else {
            self.counters.record_miss();
            return None;
        };
        self.counters.record_hit();
        self.promote(slot);
        let entry = &mut self.slots[slot].entry;
        entry.record_hit();
        Some(entry.value.clone())
    }

    /// Insert or replace `key`, promoting it and evicting the LRU entry at capacity
    pub fn set(&mut self, key: CacheKey, value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&slot) = self.index.get(&key) {
            self.slots[slot].entry.replace(value);
            self.promote(slot);
            return;
        }

        let slot = if self.slots.len() < self.capacity {
            self.slots.push(Slot {
                key: key.clone(),
                entry: CacheEntry::new(value),
                prev: None,
                next: None,
            });
            self.slots.len() - 1
        } else {
            let Some(victim) = self.tail else {
                return;
            };
            self.unlink(victim);
            let evicted = std::mem::replace(
                &mut self.slots[victim],
                Slot {
                    key: key.clone(),
                    entry: CacheEntry::new(value),
                    prev: None,
                    next: None,
                },
            );
            self.index.remove(&evicted.key);
            self.counters.record_eviction();
            tracing::trace!(
                target: "treepath::cache",
                evicted = %evicted.key,
                hits = evicted.entry.hit_count,
                "evicted least recently used entry"
            );
            victim
        };

        self.index.insert(key, slot);
        self.push_front(slot);
    }

    /// Whether `key` is cached, without touching recency or counters
    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.index.contains_key(key)
    }

    /// Drop every entry; counters are reset too
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.counters.reset();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &CacheKey> {
        std::iter::successors(self.head, |&slot| self.slots[slot].next)
            .map(|slot| &self.slots[slot].key)
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let size = self.len();
        let total_hits: u64 = self.slots.iter().map(|slot| slot.entry.hit_count).sum();
        CacheStats {
            size,
            capacity: self.capacity,
            total_hits,
            average_hits: if size == 0 {
                0.0
            } else {
                total_hits as f64 / size as f64
            },
            hit_rate: self.counters.hit_rate(),
            misses: self.counters.misses(),
            evictions: self.counters.evictions(),
        }
    }

    fn promote(&mut self, slot: usize) {
        if self.head != Some(slot) {
            self.unlink(slot);
            self.push_front(slot);
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }
        self.slots[slot].prev = None;
        self.slots[slot].next = None;
    }

    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = None;
        self.slots[slot].next = self.head;
        if let Some(head) = self.head {
            self.slots[head].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}

impl<V> std::fmt::Debug for QueryCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .field("counters", &self.counters)
            .finish()
    }
}
