//! Non-owning document identity table
//!
//! Each `Arc<D>` instance gets a [`DocumentId`] on first use. The table holds
//! only `Weak<D>` references, so caching never keeps a document alive. A
//! held `Weak` also pins the allocation address, which keeps the pointer
//! lookup unambiguous until the entry is purged.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use hashbrown::HashMap;

/// Table size below which dead entries are not purged
const PURGE_FLOOR: usize = 64;

/// Opaque, monotonically assigned document identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

impl DocumentId {
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Side table from document instances to ids
pub struct DocumentIds<D> {
    entries: HashMap<usize, (Weak<D>, DocumentId)>,
    next_id: u64,
    purge_at: usize,
}

impl<D> DocumentIds<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            purge_at: PURGE_FLOOR,
        }
    }

    /// Id of `document`, assigned on first use
    pub fn id_of(&mut self, document: &Arc<D>) -> DocumentId {
        let address = Arc::as_ptr(document) as usize;
        if let Some((weak, id)) = self.entries.get(&address)
            && weak.strong_count() > 0
        {
            return *id;
        }

        if self.entries.len() >= self.purge_at {
            self.purge();
            self.purge_at = (self.entries.len() * 2).max(PURGE_FLOOR);
        }

        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.entries.insert(address, (Arc::downgrade(document), id));
        id
    }

    /// Drop entries whose document has been released
    pub fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, (weak, _)| weak.strong_count() > 0);
        let purged = before - self.entries.len();
        if purged > 0 {
            tracing::trace!(target: "treepath::cache", purged, "purged released documents");
        }
        purged
    }

    /// Number of tracked documents, live or not yet purged
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D> Default for DocumentIds<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for DocumentIds<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentIds")
            .field("tracked", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
