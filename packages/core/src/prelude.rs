//! Canonical types for embedding the query pipeline

pub use crate::ast::{BinaryOp, FilterExpression, Literal, PathAst, PathNode, Segment, UnaryOp};
pub use crate::cache::{CacheStats, DocumentId, QueryCache, QueryEngine, SharedQueryCache};
pub use crate::compiler::{ParseOptions, ParseOutcome, PathParser, parse_path};
pub use crate::config::{ConfigurationError, QueryConfig, Validator};
pub use crate::core_evaluator::{EvaluateOptions, Evaluator, QueryOutput};
pub use crate::document::{Document, MapAccess, Node, Scalar};
pub use crate::error::{ErrorKind, PathError, PathResult};
pub use crate::expression::{PathMetadata, ast_to_string, validate_path};
pub use crate::filter::FilterValue;
pub use crate::functions::{FunctionRegistry, OperatorRegistry};
