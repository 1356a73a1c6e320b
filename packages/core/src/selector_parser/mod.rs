//! Path segment parsing
//!
//! Recursive descent over the segments of a path: dot members, recursive
//! descent, and bracket bodies (names, indices, slices, wildcards, filters).

pub mod bracket;
pub mod core;
pub mod dot;
pub mod slice;

pub use core::SelectorParser;
