//! Evaluation context threaded through expansion steps

use std::fmt;

/// Root document plus current and maximum expansion depth
///
/// Copied into every child; `depth <= max_depth` always holds.
pub struct EvalContext<'a, D> {
    root: &'a D,
    depth: usize,
    max_depth: usize,
}

impl<'a, D> EvalContext<'a, D> {
    /// Context at the document root
    #[inline]
    pub fn root(document: &'a D, max_depth: usize) -> Self {
        Self {
            root: document,
            depth: 0,
            max_depth,
        }
    }

    /// Context one level deeper, or `None` at the depth limit
    #[inline]
    #[must_use]
    pub fn child(&self) -> Option<Self> {
        (self.depth < self.max_depth).then(|| Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    #[inline]
    #[must_use]
    pub fn root_document(&self) -> &'a D {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<D> Clone for EvalContext<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for EvalContext<'_, D> {}

impl<D> fmt::Debug for EvalContext<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}
