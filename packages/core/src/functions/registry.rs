//! Registries for custom filter operators and functions
//!
//! Operators are invoked as `(left, right) -> bool` when an identifier
//! appears in operator position; functions as `name(args...)`. The
//! evaluator knows nothing about their algorithms.

use std::{fmt, sync::Arc};

use hashbrown::HashMap;

use super::builtins::call_builtin;
use crate::{document::Document, filter::FilterValue};

/// Registered binary operator
pub type OperatorFn<D> =
    Arc<dyn for<'a> Fn(&FilterValue<'a, D>, &FilterValue<'a, D>) -> bool + Send + Sync>;

/// Registered function
pub type FunctionFn<D> =
    Arc<dyn for<'a> Fn(&[FilterValue<'a, D>]) -> FilterValue<'a, D> + Send + Sync>;

/// Custom binary operators by name
pub struct OperatorRegistry<D> {
    operators: HashMap<String, OperatorFn<D>>,
}

impl<D: Document> OperatorRegistry<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Register or replace an operator
    pub fn register<F>(&mut self, name: impl Into<String>, operator: F) -> &mut Self
    where
        F: for<'a> Fn(&FilterValue<'a, D>, &FilterValue<'a, D>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(target: "treepath::filter", operator = %name, "registered custom operator");
        self.operators.insert(name, Arc::new(operator));
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    /// Apply operator `name`; unknown operators yield `false`
    pub fn apply(&self, name: &str, left: &FilterValue<'_, D>, right: &FilterValue<'_, D>) -> bool {
        match self.operators.get(name) {
            Some(operator) => operator(left, right),
            None => {
                tracing::debug!(target: "treepath::filter", operator = name, "unknown custom operator");
                false
            }
        }
    }
}

/// Functions by name, each with an optional fixed arity
pub struct FunctionRegistry<D> {
    functions: HashMap<String, (Option<usize>, FunctionFn<D>)>,
}

impl<D: Document> FunctionRegistry<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register or replace a function; calls with another arity yield `false`
    ///
    /// Built-in names always resolve to the built-in.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Option<usize>, function: F) -> &mut Self
    where
        F: for<'a> Fn(&[FilterValue<'a, D>]) -> FilterValue<'a, D> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(target: "treepath::filter", function = %name, ?arity, "registered function");
        self.functions.insert(name, (arity, Arc::new(function)));
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Call `name` with evaluated arguments; unknown names yield `false`
    pub fn call<'a>(&self, name: &str, args: &[FilterValue<'a, D>]) -> FilterValue<'a, D> {
        if let Some(value) = call_builtin(name, args) {
            return value;
        }
        match self.functions.get(name) {
            Some((arity, function)) if arity.is_none_or(|expected| expected == args.len()) => {
                function(args)
            }
            Some(_) => {
                tracing::debug!(target: "treepath::filter", function = name, "function called with wrong arity");
                FilterValue::Bool(false)
            }
            None => {
                tracing::debug!(target: "treepath::filter", function = name, "unknown function");
                FilterValue::Bool(false)
            }
        }
    }
}

impl<D: Document> Default for OperatorRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> Default for FunctionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for OperatorRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            operators: self.operators.clone(),
        }
    }
}

impl<D> Clone for FunctionRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
        }
    }
}

impl<D> fmt::Debug for OperatorRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.operators.keys()).finish()
    }
}

impl<D> fmt::Debug for FunctionRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.functions.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use serde_json::Value;

    use super::*;

    #[test]
    fn test_registered_operator_is_dispatched_by_name() {
        let mut operators: OperatorRegistry<Value> = OperatorRegistry::new();
        operators.register("iequals", |left, right| {
            match (left.stringify(), right.stringify()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(&b),
                _ => false,
            }
        });
        let left = FilterValue::String(Cow::Borrowed("Alice"));
        let right = FilterValue::String(Cow::Borrowed("ALICE"));
        assert!(operators.apply("iequals", &left, &right));
        assert!(!operators.apply("unknown", &left, &right));
    }

    #[test]
    fn test_function_arity_and_builtins() {
        let mut functions: FunctionRegistry<Value> = FunctionRegistry::new();
        functions.register("double", Some(1), |args| match args {
            [FilterValue::Integer(n)] => FilterValue::Integer(n * 2),
            _ => FilterValue::Null,
        });
        // built-ins cannot be shadowed
        functions.register("length", None, |_| FilterValue::Integer(-1));

        assert_eq!(
            functions.call("double", &[FilterValue::Integer(4)]),
            FilterValue::Integer(8)
        );
        assert_eq!(functions.call("double", &[]), FilterValue::Bool(false));
        assert_eq!(
            functions.call("length", &[FilterValue::String(Cow::Borrowed("abc"))]),
            FilterValue::Integer(3)
        );
        assert_eq!(functions.call("missing", &[]), FilterValue::Bool(false));
    }
}
