//! Core `QueryBuilder` structures and configuration methods
//!
//! The builder starts in [`PathNotSet`]; [`QueryBuilder::path`] compiles a
//! path and moves it to [`PathSet`], where execution methods live.

use std::fmt;

use serde_json::Value;
use treepath_core::{
    Document, EvaluateOptions, Evaluator, FilterValue, FunctionRegistry, OperatorRegistry,
    ParseOptions, PathAst, PathParser, PathResult, QueryConfig,
};

/// State marker indicating no path has been compiled
#[derive(Debug, Clone, Copy)]
pub struct PathNotSet;

/// State holding the compiled path and the evaluator that runs it
///
/// The evaluator is built once, so its regex cache is shared by every
/// execution of the same builder.
pub struct PathSet<D> {
    pub(crate) ast: PathAst,
    pub(crate) evaluator: Evaluator<D>,
}

impl<D> fmt::Debug for PathSet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSet")
            .field("ast", &self.ast)
            .field("evaluator", &self.evaluator)
            .finish()
    }
}

/// Fluent query builder
///
/// Type parameter `S` tracks whether a path has been compiled:
/// - `PathNotSet`: limits and custom operators can be configured
/// - `PathSet`: the path is fixed, only execution methods are available
pub struct QueryBuilder<D = Value, S = PathNotSet> {
    pub(crate) parse_options: ParseOptions,
    pub(crate) evaluate_options: EvaluateOptions,
    pub(crate) operators: OperatorRegistry<D>,
    pub(crate) functions: FunctionRegistry<D>,
    pub(crate) state: S,
    pub(crate) debug_enabled: bool,
}

impl<D: Document> QueryBuilder<D, PathNotSet> {
    /// Start a builder with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&QueryConfig::default())
    }

    /// Start a builder from the parse and evaluate sections of `config`
    #[must_use]
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            parse_options: config.parse,
            evaluate_options: config.evaluate,
            operators: OperatorRegistry::new(),
            functions: FunctionRegistry::new(),
            state: PathNotSet,
            debug_enabled: false,
        }
    }

    /// Bound on expansion depth
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.evaluate_options.max_depth = depth;
        self
    }

    /// Ceiling on `..` operators, applied at parse and evaluate time
    #[must_use]
    pub fn max_recursive_descents(mut self, limit: usize) -> Self {
        self.parse_options.max_recursive_descents = limit;
        self.evaluate_options.max_recursive_descents = limit;
        self
    }

    /// Ceiling on filter expression nesting, applied at parse and evaluate time
    #[must_use]
    pub fn max_filter_depth(mut self, limit: usize) -> Self {
        self.parse_options.max_filter_depth = limit;
        self.evaluate_options.max_filter_depth = limit;
        self
    }

    /// Register a custom binary operator usable as `@.a name value`
    #[must_use]
    pub fn operator<F>(mut self, name: impl Into<String>, operator: F) -> Self
    where
        F: for<'a> Fn(&FilterValue<'a, D>, &FilterValue<'a, D>) -> bool + Send + Sync + 'static,
    {
        self.operators.register(name, operator);
        self
    }

    /// Register a custom filter function; `None` arity accepts any count
    #[must_use]
    pub fn function<F>(mut self, name: impl Into<String>, arity: Option<usize>, function: F) -> Self
    where
        F: for<'a> Fn(&[FilterValue<'a, D>]) -> FilterValue<'a, D> + Send + Sync + 'static,
    {
        self.functions.register(name, arity, function);
        self
    }

    /// Log each execution at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Compile `text` and fix it as the builder's path
    ///
    /// # Errors
    ///
    /// Lex, parse or validation errors for `text`.
    pub fn path(self, text: &str) -> PathResult<QueryBuilder<D, PathSet<D>>> {
        let ast = PathParser::compile_with(text, &self.parse_options)?;
        if self.debug_enabled {
            log::debug!("compiled query path: {ast}");
        }
        let evaluator =
            Evaluator::with_registries(self.operators.clone(), self.functions.clone());
        Ok(QueryBuilder {
            parse_options: self.parse_options,
            evaluate_options: self.evaluate_options,
            operators: self.operators,
            functions: self.functions,
            state: PathSet { ast, evaluator },
            debug_enabled: self.debug_enabled,
        })
    }
}

impl<D: Document> Default for QueryBuilder<D, PathNotSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, S: fmt::Debug> fmt::Debug for QueryBuilder<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("parse_options", &self.parse_options)
            .field("evaluate_options", &self.evaluate_options)
            .field("operators", &self.operators)
            .field("functions", &self.functions)
            .field("state", &self.state)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
