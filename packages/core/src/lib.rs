//! # treepath core
//!
//! Path-expression queries over nested map/list/scalar documents.
//!
//! The pipeline runs tokenizer → parser → validator → evaluator, with an
//! optional LRU result cache in front of the evaluator:
//!
//! ```rust
//! use std::sync::Arc;
//! use treepath_core::{PathParser, Evaluator, EvaluateOptions, QueryEngine, QueryOutput};
//!
//! let document = serde_json::json!({"users": [{"name": "Alice", "age": 30}]});
//!
//! let ast = PathParser::compile("$.users[?(@.age >= 18)].name").expect("valid path");
//! let evaluator = Evaluator::new();
//! let names = evaluator
//!     .evaluate(&document, &ast, &EvaluateOptions::default())
//!     .expect("evaluation succeeds");
//! assert_eq!(names, QueryOutput::Many(vec![serde_json::json!("Alice")]));
//!
//! let engine = QueryEngine::new();
//! let shared = Arc::new(document);
//! let first = engine.query(&shared, "users[0].name").expect("valid path");
//! assert_eq!(first, QueryOutput::Single(serde_json::json!("Alice")));
//! ```
//!
//! Any type implementing [`Document`] can be queried; `serde_json::Value`
//! is supported out of the box.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod ast;
pub mod cache;
pub mod compiler;
pub mod config;
pub mod core_evaluator;
pub mod document;
pub mod error;
pub mod expression;
pub mod filter;
pub mod filter_parser;
pub mod functions;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
