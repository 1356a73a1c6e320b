//! Cache key scoping a canonical path to one document

use std::fmt;

use super::identity::DocumentId;

/// Cache key: document identity plus canonical path text
///
/// The path is always the canonical form, so `users[0]` and `$.users[0]`
/// share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub document: DocumentId,
    pub path: String,
}

impl CacheKey {
    #[inline]
    #[must_use]
    pub fn new(document: DocumentId, path: impl Into<String>) -> Self {
        Self {
            document,
            path: path.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.document, self.path)
    }
}
