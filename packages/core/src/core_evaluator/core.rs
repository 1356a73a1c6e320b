//! Evaluator entry point, options and output shape

use serde::{Deserialize, Serialize};

use super::context::EvalContext;
use crate::{
    ast::{PathAst, PathNode},
    document::Document,
    error::PathResult,
    expression::validation::{
        DEFAULT_MAX_FILTER_DEPTH, DEFAULT_MAX_RECURSIVE_DESCENTS, check_filter_depth,
        check_recursive_ceiling,
    },
    filter::{RegexCache, security::scan_filter},
    functions::{FunctionRegistry, OperatorRegistry},
};

/// Default bound on expansion depth
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Options for a single evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Expansion depth past which traversal silently stops
    pub max_depth: usize,
    /// Ceiling on `..` operators, re-checked before evaluating
    pub max_recursive_descents: usize,
    /// Ceiling on filter tree height, re-checked before evaluating
    pub max_filter_depth: usize,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_recursive_descents: DEFAULT_MAX_RECURSIVE_DESCENTS,
            max_filter_depth: DEFAULT_MAX_FILTER_DEPTH,
        }
    }
}

/// Evaluation result: one value, nothing, or a list
///
/// `Many` is produced whenever the path contains a wildcard, recursive
/// descent, slice or filter, even when it holds zero or one value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput<D> {
    Absent,
    Single(D),
    Many(Vec<D>),
}

impl<D> QueryOutput<D> {
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, QueryOutput::Absent)
    }

    /// The single value, if this is `Single`
    #[must_use]
    pub fn as_single(&self) -> Option<&D> {
        match self {
            QueryOutput::Single(value) => Some(value),
            _ => None,
        }
    }

    /// The list, if this is `Many`
    #[must_use]
    pub fn as_many(&self) -> Option<&[D]> {
        match self {
            QueryOutput::Many(values) => Some(values),
            _ => None,
        }
    }

    /// Flatten into a list: absent is empty, single is one element
    #[must_use]
    pub fn into_vec(self) -> Vec<D> {
        match self {
            QueryOutput::Absent => Vec::new(),
            QueryOutput::Single(value) => vec![value],
            QueryOutput::Many(values) => values,
        }
    }
}

/// A document position paired with the context it was reached in
pub(crate) struct Cursor<'a, D> {
    pub(crate) value: &'a D,
    pub(crate) context: EvalContext<'a, D>,
}

impl<'a, D> Cursor<'a, D> {
    #[inline]
    pub(crate) fn new(value: &'a D, context: EvalContext<'a, D>) -> Self {
        Self { value, context }
    }
}

/// Path evaluator with its filter collaborators
///
/// Holds no per-query state; the regex cache is internally synchronized, so
/// one evaluator can serve concurrent queries.
pub struct Evaluator<D> {
    pub(crate) operators: OperatorRegistry<D>,
    pub(crate) functions: FunctionRegistry<D>,
    pub(crate) regex_cache: RegexCache,
}

impl<D: Document> Evaluator<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_registries(OperatorRegistry::new(), FunctionRegistry::new())
    }

    #[must_use]
    pub fn with_registries(operators: OperatorRegistry<D>, functions: FunctionRegistry<D>) -> Self {
        Self {
            operators,
            functions,
            regex_cache: RegexCache::new(),
        }
    }

    pub fn operators_mut(&mut self) -> &mut OperatorRegistry<D> {
        &mut self.operators
    }

    pub fn functions_mut(&mut self) -> &mut FunctionRegistry<D> {
        &mut self.functions
    }

    /// Patterns compiled for `matches` so far
    #[inline]
    #[must_use]
    pub fn regex_cache(&self) -> &RegexCache {
        &self.regex_cache
    }

    /// Evaluate `ast` against `document`
    ///
    /// # Errors
    ///
    /// `Validation` when the path exceeds the recursive descent ceiling or a
    /// filter is taller than the filter depth ceiling,
    /// `Security` when a filter references a denied property or a rejected
    /// pattern, `Evaluation` for an invalid regular expression.
    pub fn evaluate(
        &self,
        document: &D,
        ast: &PathAst,
        options: &EvaluateOptions,
    ) -> PathResult<QueryOutput<D>> {
        check_recursive_ceiling(ast, options.max_recursive_descents)?;
        check_filter_depth(ast, options.max_filter_depth)?;
        for node in ast.nodes() {
            if let PathNode::Filter(expression) = node {
                scan_filter(expression)?;
            }
        }

        let mut cursors = vec![Cursor::new(
            document,
            EvalContext::root(document, options.max_depth),
        )];
        for node in ast.nodes() {
            let mut next = Vec::new();
            for cursor in &cursors {
                self.apply_node(node, cursor, &mut next)?;
            }
            cursors = next;
            if cursors.is_empty() {
                break;
            }
        }

        // the output shape is static, so an emptied list stays a list
        let multiplied = !ast.metadata().is_deterministic;

        tracing::debug!(
            target: "treepath::evaluator",
            path = %ast,
            results = cursors.len(),
            multiplied,
            "evaluated path"
        );

        let mut values = cursors.into_iter().map(|cursor| cursor.value.clone());
        Ok(if multiplied {
            QueryOutput::Many(values.collect())
        } else {
            match values.next() {
                Some(value) => QueryOutput::Single(value),
                None => QueryOutput::Absent,
            }
        })
    }
}

impl<D: Document> Default for Evaluator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for Evaluator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("operators", &self.operators)
            .field("functions", &self.functions)
            .field("regex_cache", &self.regex_cache)
            .finish()
    }
}
