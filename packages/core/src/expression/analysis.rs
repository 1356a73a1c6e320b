//! Derived path metadata
//!
//! Feature flags and an additive complexity score computed from the AST
//! alone, so callers know the result shape before evaluating.

use crate::ast::{PathAst, PathNode};

/// Static properties of a parsed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathMetadata {
    pub has_wildcard: bool,
    pub has_recursive: bool,
    pub has_filter: bool,
    pub has_slice: bool,
    /// True when evaluation yields a single value or absence, never a list
    pub is_deterministic: bool,
    pub recursive_count: usize,
    pub complexity: u32,
}

impl PathMetadata {
    /// Analyze a parsed path
    #[must_use]
    pub fn analyze(ast: &PathAst) -> Self {
        let mut metadata = Self::default();

        for node in ast.nodes() {
            let cost = match node {
                PathNode::Root => 0,
                PathNode::Property(_) | PathNode::Index(_) => 1,
                PathNode::Wildcard => {
                    metadata.has_wildcard = true;
                    2
                }
                PathNode::Slice { .. } => {
                    metadata.has_slice = true;
                    2
                }
                PathNode::Recursive(_) => {
                    metadata.has_recursive = true;
                    metadata.recursive_count += 1;
                    5
                }
                PathNode::Filter(expression) => {
                    metadata.has_filter = true;
                    3u32.saturating_add(expression.complexity_score())
                }
            };
            metadata.complexity = metadata.complexity.saturating_add(cost);
        }

        metadata.is_deterministic = !(metadata.has_wildcard
            || metadata.has_recursive
            || metadata.has_slice
            || metadata.has_filter);
        metadata
    }
}

impl PathAst {
    /// Shorthand for [`PathMetadata::analyze`]
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> PathMetadata {
        PathMetadata::analyze(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::PathParser;

    fn analyze(path: &str) -> PathMetadata {
        PathParser::compile(path)
            .expect("Failed to compile path")
            .metadata()
    }

    #[test]
    fn test_plain_path_is_deterministic() {
        let metadata = analyze("$.users[0].name");
        assert!(metadata.is_deterministic);
        assert_eq!(metadata.complexity, 3);
        assert!(!metadata.has_wildcard);
    }

    #[test]
    fn test_multiplying_nodes_clear_determinism() {
        for path in ["$.a[*]", "$..a", "$.a[1:2]", "$.a[?(@.b)]"] {
            assert!(!analyze(path).is_deterministic, "{path} should yield a list");
        }
    }

    #[test]
    fn test_complexity_is_additive() {
        // Root 0 + Recursive 5 + Wildcard 2 + Slice 2
        assert_eq!(analyze("$..*[*][::2]").complexity, 9);
        let metadata = analyze("$..a..b");
        assert_eq!(metadata.recursive_count, 2);
        assert!(metadata.has_recursive);
    }

    #[test]
    fn test_filter_complexity_includes_expression() {
        // Filter 3 + (== 2 + property 1 + literal 1)
        assert_eq!(analyze("$[?(@.a == 1)]").complexity, 7);
        assert!(analyze("$[?(@.a == 1)]").has_filter);
    }
}
