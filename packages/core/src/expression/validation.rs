//! Semantic validation of parsed paths

use crate::{
    ast::{BinaryOp, FilterExpression, PathAst, PathNode},
    error::{PathResult, validation_error},
    functions::builtin_arity,
    tokens::TokenMatcher,
};

/// Default ceiling on `..` operators in one path
pub const DEFAULT_MAX_RECURSIVE_DESCENTS: usize = 10;

/// Default ceiling on filter expression nesting
pub const DEFAULT_MAX_FILTER_DEPTH: usize = 64;

/// Largest integer magnitude accepted for indices and slice bounds (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Validate every segment of `ast`
///
/// # Errors
///
/// Returns a `Validation` error anchored at the offending segment.
pub fn validate_path(ast: &PathAst, max_recursive_descents: usize) -> PathResult<()> {
    for segment in ast.segments() {
        let position = Some(segment.position);
        match &segment.node {
            PathNode::Root | PathNode::Wildcard | PathNode::Recursive(None) => {}
            PathNode::Property(name) | PathNode::Recursive(Some(name)) => {
                if name.is_empty() {
                    return Err(validation_error("property name cannot be empty", position));
                }
            }
            PathNode::Index(index) => check_bound("index", *index, position)?,
            PathNode::Slice { start, end, step } => {
                for (label, bound) in [("slice start", start), ("slice end", end), ("slice step", step)] {
                    if let Some(value) = bound {
                        check_bound(label, *value, position)?;
                    }
                }
                if *step == Some(0) {
                    return Err(validation_error("slice step cannot be zero", position));
                }
            }
            PathNode::Filter(expression) => validate_filter(expression, position)?,
        }
    }
    check_recursive_ceiling(ast, max_recursive_descents)
}

/// Check the number of `..` operators against `limit`
///
/// # Errors
///
/// Returns a `Validation` error at the first descent past the limit.
pub fn check_recursive_ceiling(ast: &PathAst, limit: usize) -> PathResult<()> {
    let over_limit = ast
        .segments()
        .iter()
        .filter(|segment| matches!(segment.node, PathNode::Recursive(_)))
        .nth(limit);
    match over_limit {
        Some(segment) => Err(validation_error(
            format!("more than {limit} recursive descent operators in one path"),
            Some(segment.position),
        )),
        None => Ok(()),
    }
}

/// Check every filter's tree height against `limit`
///
/// The parser already enforces this; trees assembled by hand are caught here
/// before any recursive pass runs over them.
///
/// # Errors
///
/// Returns a `Validation` error at the first filter taller than `limit`.
pub fn check_filter_depth(ast: &PathAst, limit: usize) -> PathResult<()> {
    for segment in ast.segments() {
        if let PathNode::Filter(expression) = &segment.node {
            let depth = expression.depth();
            if depth > limit {
                return Err(validation_error(
                    format!("filter expression nested {depth} deep, more than {limit}"),
                    Some(segment.position),
                ));
            }
        }
    }
    Ok(())
}

fn check_bound(label: &str, value: i64, position: Option<usize>) -> PathResult<()> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER.unsigned_abs() {
        return Err(validation_error(
            format!("{label} {value} is outside the safe integer range"),
            position,
        ));
    }
    Ok(())
}

fn validate_filter(expression: &FilterExpression, position: Option<usize>) -> PathResult<()> {
    let mut failure: Option<String> = None;
    expression.walk(&mut |node| {
        if failure.is_none() {
            failure = filter_node_problem(node);
        }
    });
    match failure {
        Some(reason) => Err(validation_error(reason, position)),
        None => Ok(()),
    }
}

fn filter_node_problem(node: &FilterExpression) -> Option<String> {
    match node {
        FilterExpression::PropertyRef(path) if path.iter().any(String::is_empty) => {
            Some("property name cannot be empty".to_string())
        }
        FilterExpression::Binary {
            operator: BinaryOp::Custom(name),
            ..
        } if !TokenMatcher::is_plain_identifier(name) || TokenMatcher::is_keyword(name) => {
            Some(format!("custom operator name '{name}' is not a plain identifier"))
        }
        FilterExpression::Call { name, .. } if name.is_empty() => {
            Some("function name cannot be empty".to_string())
        }
        FilterExpression::Call { name, args } => builtin_arity(name)
            .filter(|&arity| arity != args.len())
            .map(|arity| {
                format!(
                    "function '{name}' expects {arity} argument(s), got {}",
                    args.len()
                )
            }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Literal, PathAst, PathNode},
        error::ErrorKind,
    };

    #[test]
    fn test_index_outside_safe_range() {
        let ast = PathAst::from_nodes([PathNode::Root, PathNode::Index(MAX_SAFE_INTEGER + 1)]);
        let error = validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS)
            .expect_err("Expected validation error");
        assert_eq!(error.kind(), ErrorKind::Validation);

        let ast = PathAst::from_nodes([PathNode::Index(-MAX_SAFE_INTEGER)]);
        assert!(validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS).is_ok());
    }

    #[test]
    fn test_empty_property_name() {
        let ast = PathAst::from_nodes([PathNode::Property(String::new())]);
        assert!(validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS).is_err());
    }

    #[test]
    fn test_recursive_ceiling_is_configurable() {
        let ast = PathAst::from_nodes([
            PathNode::Recursive(None),
            PathNode::Recursive(Some("a".into())),
            PathNode::Recursive(None),
        ]);
        assert!(validate_path(&ast, 3).is_ok());
        assert!(validate_path(&ast, 2).is_err());
    }

    #[test]
    fn test_builtin_arity_is_checked() {
        let call = FilterExpression::Call {
            name: "length".into(),
            args: vec![],
        };
        let ast = PathAst::from_nodes([PathNode::Filter(call)]);
        let error = validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS)
            .expect_err("Expected validation error");
        assert!(error.message().contains("length"));
    }

    #[test]
    fn test_unknown_function_any_arity() {
        let call = FilterExpression::Call {
            name: "score".into(),
            args: vec![FilterExpression::Literal(Literal::Integer(1)); 3],
        };
        let ast = PathAst::from_nodes([PathNode::Filter(call)]);
        assert!(validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS).is_ok());
    }

    #[test]
    fn test_empty_custom_operator_name() {
        let expression = FilterExpression::Binary {
            operator: BinaryOp::Custom(String::new()),
            left: Box::new(FilterExpression::PropertyRef(vec!["a".into()])),
            right: Box::new(FilterExpression::Literal(Literal::Null)),
        };
        let ast = PathAst::from_nodes([PathNode::Filter(expression)]);
        assert!(validate_path(&ast, DEFAULT_MAX_RECURSIVE_DESCENTS).is_err());
    }
}
