//! Path evaluator
//!
//! A stateless tree-walking interpreter: each path node maps the current
//! list of cursors to the next one. Absence is data, never an error.

pub mod arrays;
pub mod context;
pub mod core;
pub mod recursive_descent;
pub mod selectors;

pub use context::EvalContext;
pub use core::{EvaluateOptions, Evaluator, QueryOutput};
