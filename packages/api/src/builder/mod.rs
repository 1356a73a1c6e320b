//! Query builder modules
//!
//! Fluent configuration of an evaluator followed by compiling a path and
//! running it against documents.

pub mod core;
pub mod methods;

// Re-export all public types for convenience
pub use core::*;
