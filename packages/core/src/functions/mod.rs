//! Filter functions and pluggable operators
//!
//! Built-in functions:
//! - `length(x)`: characters of a string, entries of a list or map, else null
//! - `exists(x)`: whether the argument resolved to a value
//! - `type(x)`: type name of the argument
//!
//! Anything else is looked up in the registries. Unknown names evaluate to
//! `false` so filter evaluation stays total.

pub mod builtins;
pub mod registry;

pub use builtins::builtin_arity;
pub use registry::{FunctionRegistry, OperatorRegistry};
