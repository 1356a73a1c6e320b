//! Filter expression parsing for `[?...]` predicates
//!
//! Precedence climbing over binary operators with unary `!`, `@`-rooted
//! property paths, literals and function calls as primaries.

pub mod core;
pub mod expressions;
pub mod functions;
pub mod properties;

pub use core::FilterParser;
