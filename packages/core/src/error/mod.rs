//! Path query error handling module
//!
//! Error taxonomy for the query pipeline. Malformed query text surfaces as
//! `Lex`/`Parse`, semantically invalid ASTs as `Validation`, detected abuse
//! patterns inside filters as `Security`, and unreachable evaluator states as
//! `Evaluation`. Missing data is never an error.

pub mod constructors;
mod types;

pub use constructors::{
    evaluation_error, lex_error, parse_error, security_error, validation_error,
};
pub use types::{ErrorKind, PathError, PathResult};
