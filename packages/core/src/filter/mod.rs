//! Filter sub-evaluator for `[?...]` predicates
//!
//! Decomposed into value representation, comparison semantics, regex
//! handling and the security checks run before any element is visited.

pub mod comparison;
pub mod core;
pub mod regex_cache;
pub mod security;
pub mod value;

pub use core::FilterEvaluator;
pub use regex_cache::RegexCache;
pub use value::FilterValue;
