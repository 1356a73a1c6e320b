//! Cached query pipeline: parse, canonicalize, look up, evaluate, store

use std::sync::Arc;

use super::{cache_stats::CacheStats, shared::SharedQueryCache};
use crate::{
    compiler::PathParser,
    config::{ConfigResult, QueryConfig, Validator},
    core_evaluator::{Evaluator, QueryOutput},
    document::Document,
    error::PathResult,
    filter::FilterValue,
};

/// Query front end owning an evaluator and its result cache
///
/// Results are keyed by document instance and canonical path, so equivalent
/// spellings of a path share one entry and equal but distinct documents never
/// share results.
pub struct QueryEngine<D> {
    config: QueryConfig,
    evaluator: Evaluator<D>,
    cache: SharedQueryCache<D>,
}

impl<D: Document> QueryEngine<D> {
    /// Engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        let config = QueryConfig::default();
        Self {
            cache: SharedQueryCache::new(config.cache_capacity),
            evaluator: Evaluator::new(),
            config,
        }
    }

    /// Engine with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the `ConfigurationError` reported by [`QueryConfig::validate`].
    pub fn with_config(config: QueryConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            cache: SharedQueryCache::new(config.cache_capacity),
            evaluator: Evaluator::new(),
            config,
        })
    }

    /// Evaluate `text` against `document`, serving repeats from the cache
    ///
    /// # Errors
    ///
    /// Any lex, parse, validation, security or evaluation error. Failed
    /// queries are never cached.
    pub fn query(&self, document: &Arc<D>, text: &str) -> PathResult<QueryOutput<D>> {
        let ast = PathParser::compile_with(text, &self.config.parse)?;
        let key = self.cache.key_for(document, &ast.to_string());

        if let Some(cached) = self.cache.get(&key) {
            tracing::trace!(target: "treepath::cache", key = %key, "cache hit");
            return Ok(cached);
        }

        let output = self
            .evaluator
            .evaluate(document.as_ref(), &ast, &self.config.evaluate)?;
        tracing::trace!(target: "treepath::cache", key = %key, "cache miss, storing result");
        self.cache.set(key, output.clone());
        Ok(output)
    }

    /// Register a custom binary operator; cached results are dropped
    pub fn register_operator<F>(&mut self, name: impl Into<String>, operator: F) -> &mut Self
    where
        F: for<'a> Fn(&FilterValue<'a, D>, &FilterValue<'a, D>) -> bool + Send + Sync + 'static,
    {
        self.evaluator.operators_mut().register(name, operator);
        self.cache.clear();
        self
    }

    /// Register a custom filter function; cached results are dropped
    pub fn register_function<F>(
        &mut self,
        name: impl Into<String>,
        arity: Option<usize>,
        function: F,
    ) -> &mut Self
    where
        F: for<'a> Fn(&[FilterValue<'a, D>]) -> FilterValue<'a, D> + Send + Sync + 'static,
    {
        self.evaluator.functions_mut().register(name, arity, function);
        self.cache.clear();
        self
    }

    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator<D> {
        &self.evaluator
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<D: Document> Default for QueryEngine<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> std::fmt::Debug for QueryEngine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("config", &self.config)
            .field("evaluator", &self.evaluator)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_equivalent_spellings_share_an_entry() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let document = Arc::new(json!({"users": [{"name": "Alice"}]}));

        let first = engine
            .query(&document, "users[0].name")
            .expect("Failed to query");
        let second = engine
            .query(&document, "$ . users [0] . name")
            .expect("Failed to query");
        assert_eq!(first, QueryOutput::Single(json!("Alice")));
        assert_eq!(first, second);

        let stats = engine.cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.total_hits, 1);
    }

    #[test]
    fn test_failed_queries_are_not_cached() {
        let engine: QueryEngine<Value> = QueryEngine::new();
        let document = Arc::new(json!([]));
        assert!(engine.query(&document, "$[?(@.__proto__)]").is_err());
        assert!(engine.query(&document, "$[").is_err());
        assert_eq!(engine.cache_stats().size, 0);
    }

    #[test]
    fn test_registering_an_operator_clears_the_cache() {
        let mut engine: QueryEngine<Value> = QueryEngine::new();
        let document = Arc::new(json!([1, 2, 3]));
        let before = engine
            .query(&document, "$[?(@ near 2)]")
            .expect("Failed to query");
        assert_eq!(before, QueryOutput::Many(vec![]));

        engine.register_operator("near", |left, right| {
            match (left.as_f64(), right.as_f64()) {
                (Some(l), Some(r)) => (l - r).abs() <= 1.0,
                _ => false,
            }
        });
        assert_eq!(engine.cache_stats().size, 0);
        let after = engine
            .query(&document, "$[?(@ near 2)]")
            .expect("Failed to query");
        assert_eq!(after, QueryOutput::Many(vec![json!(1), json!(2), json!(3)]));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = QueryConfig {
            cache_capacity: 0,
            ..QueryConfig::default()
        };
        assert!(QueryEngine::<Value>::with_config(config).is_err());
    }
}
