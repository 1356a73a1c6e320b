//! Execution methods for a builder with a compiled path

use treepath_core::{Document, PathAst, PathMetadata, PathResult, QueryOutput};

use super::core::{PathSet, QueryBuilder};

impl<D: Document> QueryBuilder<D, PathSet<D>> {
    /// Compiled path
    #[must_use]
    pub fn ast(&self) -> &PathAst {
        &self.state.ast
    }

    /// Static facts about the compiled path
    #[must_use]
    pub fn metadata(&self) -> PathMetadata {
        self.state.ast.metadata()
    }

    /// Run the path against `document`
    ///
    /// # Errors
    ///
    /// Security errors from filters, validation errors from the recursive
    /// ceiling and evaluation errors for invalid patterns.
    pub fn evaluate(&self, document: &D) -> PathResult<QueryOutput<D>> {
        let output = self
            .state
            .evaluator
            .evaluate(document, &self.state.ast, &self.evaluate_options)?;
        let count = match &output {
            QueryOutput::Absent => 0,
            QueryOutput::Single(_) => 1,
            QueryOutput::Many(values) => values.len(),
        };
        tracing::trace!(target: "treepath::api", count, "builder query evaluated");
        if self.debug_enabled {
            log::debug!("query {} produced {count} value(s)", self.state.ast);
        }
        Ok(output)
    }

    /// Every result as a list; absent is empty
    ///
    /// # Errors
    ///
    /// As [`QueryBuilder::evaluate`].
    pub fn all(&self, document: &D) -> PathResult<Vec<D>> {
        Ok(self.evaluate(document)?.into_vec())
    }

    /// First result, if any
    ///
    /// # Errors
    ///
    /// As [`QueryBuilder::evaluate`].
    pub fn first(&self, document: &D) -> PathResult<Option<D>> {
        Ok(self.all(document)?.into_iter().next())
    }

    /// Whether the path selects anything
    ///
    /// # Errors
    ///
    /// As [`QueryBuilder::evaluate`].
    pub fn exists(&self, document: &D) -> PathResult<bool> {
        Ok(!self.all(document)?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use treepath_core::{ErrorKind, FilterValue};

    use super::*;

    #[test]
    fn test_builder_evaluates_compiled_path() {
        let document = json!({"items": [{"price": 5}, {"price": 15}, {"price": 25}]});
        let query = QueryBuilder::<Value>::new()
            .path("$.items[?(@.price > 10)].price")
            .expect("Failed to compile path");

        assert!(!query.metadata().is_deterministic);
        assert_eq!(
            query.all(&document).expect("Failed to evaluate"),
            vec![json!(15), json!(25)]
        );
        assert_eq!(
            query.first(&document).expect("Failed to evaluate"),
            Some(json!(15))
        );
    }

    #[test]
    fn test_builder_custom_operator_and_function() {
        let document = json!([{"tag": "ALPHA"}, {"tag": "beta"}]);
        let query = QueryBuilder::<Value>::new()
            .operator("ieq", |left, right| match (left.stringify(), right.stringify()) {
                (Some(l), Some(r)) => l.eq_ignore_ascii_case(&r),
                _ => false,
            })
            .function("shout", Some(1), |args| match args.first().and_then(|value| value.stringify()) {
                Some(text) => FilterValue::from(text.to_uppercase()),
                None => FilterValue::Null,
            })
            .path("$[?(@.tag ieq 'alpha' || shout(@.tag) == 'BETA')]")
            .expect("Failed to compile path");

        assert_eq!(query.all(&document).expect("Failed to evaluate").len(), 2);
    }

    #[test]
    fn test_builder_limits_apply_at_compile_time() {
        let result = QueryBuilder::<Value>::new()
            .max_recursive_descents(1)
            .path("$..a..b");
        let error = result.expect_err("Expected recursive ceiling violation");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_missing_path_is_absent_not_error() {
        let query = QueryBuilder::<Value>::new()
            .path("$.missing.deeper")
            .expect("Failed to compile path");
        let output = query.evaluate(&json!({})).expect("Failed to evaluate");
        assert!(output.is_absent());
        assert!(!query.exists(&json!({})).expect("Failed to evaluate"));
    }

    #[test]
    fn test_builder_reuses_one_evaluator() {
        let document = json!([{"name": "alice"}, {"name": "bob"}]);
        let query = QueryBuilder::<Value>::new()
            .path("$[?(@.name matches '^a')].name")
            .expect("Failed to compile path");

        for _ in 0..3 {
            assert_eq!(
                query.all(&document).expect("Failed to evaluate"),
                vec![json!("alice")]
            );
        }
        assert_eq!(query.state.evaluator.regex_cache().len(), 1);
    }

    #[test]
    fn test_builder_filter_depth_ceiling() {
        let result = QueryBuilder::<Value>::new()
            .max_filter_depth(4)
            .path("$[?(!!!!@.a)]");
        let error = result.expect_err("Expected filter depth violation");
        assert_eq!(error.kind(), ErrorKind::Parse);

        assert!(
            QueryBuilder::<Value>::new()
                .max_filter_depth(4)
                .path("$[?(!!@.a)]")
                .is_ok()
        );
    }
}
