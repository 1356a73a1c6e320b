//! treepath public API
//!
//! Path-expression queries over nested documents. One-off queries go through
//! [`query`]; repeated queries with custom limits or operators go through
//! [`QueryBuilder`]; hosts issuing the same queries against long-lived
//! documents use [`QueryEngine`] for its result cache.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the core package
pub use treepath_core::{
    Document, ErrorKind, EvaluateOptions, Evaluator, FilterValue, ParseOptions, PathAst,
    PathError, PathMetadata, PathResult, QueryConfig, QueryEngine, QueryOutput, ast_to_string,
    parse_path,
};

use serde_json::Value;

/// Main entry point providing static builder methods
pub struct Treepath;

impl Treepath {
    /// Create a builder for `serde_json::Value` documents
    #[must_use]
    pub fn json() -> QueryBuilder<Value> {
        QueryBuilder::new()
    }

    /// Create a builder for any document type
    #[must_use]
    pub fn builder<D: Document>() -> QueryBuilder<D> {
        QueryBuilder::new()
    }

    /// Create a builder from a configuration record
    #[must_use]
    pub fn with_config<D: Document>(config: &QueryConfig) -> QueryBuilder<D> {
        QueryBuilder::from_config(config)
    }
}

/// Compile a path with default options
///
/// # Errors
///
/// Lex, parse or validation errors for `path`.
pub fn compile(path: &str) -> PathResult<PathAst> {
    treepath_core::PathParser::compile(path)
}

/// Canonical spelling of `path`
///
/// # Errors
///
/// As [`compile`].
pub fn canonicalize(path: &str) -> PathResult<String> {
    Ok(compile(path)?.to_string())
}

/// Evaluate `path` against `document` with default limits
///
/// # Errors
///
/// Any lex, parse, validation, security or evaluation error.
pub fn query(document: &Value, path: &str) -> PathResult<QueryOutput<Value>> {
    let ast = compile(path)?;
    Evaluator::new().evaluate(document, &ast, &EvaluateOptions::default())
}
