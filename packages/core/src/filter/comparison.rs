//! Comparison and string operator semantics
//!
//! Coercion table:
//!
//! | left \ right      | number  | string        | bool | null | map/list   | absent |
//! |-------------------|---------|---------------|------|------|------------|--------|
//! | number (int/float)| numeric | never         | never| never| never      | never  |
//! | string            | never   | code point    | never| never| never      | never  |
//! | bool              | never   | never         | `==` | never| never      | never  |
//! | null              | never   | never         | never| `==` | never      | never  |
//! | map/list          | never   | never         | never| never| structural | never  |
//!
//! "never" means neither equal nor ordered, so `!=` holds and every ordering
//! operator is false. Bools, null and composites support equality only.
//! Strings are never coerced to numbers.

use std::cmp::Ordering;

use super::value::FilterValue;
use crate::{ast::BinaryOp, document::Document};

/// Apply `==`, `!=`, `<`, `<=`, `>` or `>=`
pub fn compare<D: Document>(
    operator: &BinaryOp,
    left: &FilterValue<'_, D>,
    right: &FilterValue<'_, D>,
) -> bool {
    match operator {
        BinaryOp::Equal => values_equal(left, right),
        BinaryOp::NotEqual => !values_equal(left, right),
        BinaryOp::Less => ordering(left, right).is_some_and(Ordering::is_lt),
        BinaryOp::LessEq => ordering(left, right).is_some_and(Ordering::is_le),
        BinaryOp::Greater => ordering(left, right).is_some_and(Ordering::is_gt),
        BinaryOp::GreaterEq => ordering(left, right).is_some_and(Ordering::is_ge),
        _ => false,
    }
}

/// Equality under the coercion table
pub fn values_equal<D: Document>(left: &FilterValue<'_, D>, right: &FilterValue<'_, D>) -> bool {
    match (left, right) {
        (FilterValue::Missing, _) | (_, FilterValue::Missing) => false,
        (FilterValue::Null, FilterValue::Null) => true,
        (FilterValue::Bool(a), FilterValue::Bool(b)) => a == b,
        (FilterValue::String(a), FilterValue::String(b)) => a == b,
        (FilterValue::Node(a), FilterValue::Node(b)) => a == b,
        _ => numeric_ordering(left, right) == Some(Ordering::Equal),
    }
}

/// Ordering under the coercion table; `None` when the pair is unordered
pub fn ordering<D: Document>(
    left: &FilterValue<'_, D>,
    right: &FilterValue<'_, D>,
) -> Option<Ordering> {
    match (left, right) {
        (FilterValue::String(a), FilterValue::String(b)) => Some(a.as_ref().cmp(b.as_ref())),
        _ => numeric_ordering(left, right),
    }
}

#[allow(clippy::cast_precision_loss)]
fn numeric_ordering<D>(left: &FilterValue<'_, D>, right: &FilterValue<'_, D>) -> Option<Ordering> {
    match (left, right) {
        (FilterValue::Integer(a), FilterValue::Integer(b)) => Some(a.cmp(b)),
        (FilterValue::Integer(a), FilterValue::Float(b)) => (*a as f64).partial_cmp(b),
        (FilterValue::Float(a), FilterValue::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (FilterValue::Float(a), FilterValue::Float(b)) => a.partial_cmp(b),
        _ => None,
    }
}

/// Apply `contains`, `startsWith` or `endsWith` to the stringified operands
pub fn string_test<D: Document>(
    operator: &BinaryOp,
    left: &FilterValue<'_, D>,
    right: &FilterValue<'_, D>,
) -> bool {
    let (Some(haystack), Some(needle)) = (left.stringify(), right.stringify()) else {
        return false;
    };
    match operator {
        BinaryOp::Contains => haystack.contains(needle.as_ref()),
        BinaryOp::StartsWith => haystack.starts_with(needle.as_ref()),
        BinaryOp::EndsWith => haystack.ends_with(needle.as_ref()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use serde_json::{Value, json};

    use super::*;

    type V<'a> = FilterValue<'a, Value>;

    fn s(text: &str) -> V<'_> {
        FilterValue::String(Cow::Borrowed(text))
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        assert!(compare(&BinaryOp::Equal, &V::Integer(2), &V::Float(2.0)));
        assert!(compare(&BinaryOp::Less, &V::Float(1.5), &V::Integer(2)));
        assert!(compare(&BinaryOp::GreaterEq, &V::Integer(3), &V::Integer(3)));
    }

    #[test]
    fn test_strings_compare_by_code_point() {
        assert!(compare(&BinaryOp::Less, &s("B"), &s("a")));
        assert!(compare(&BinaryOp::Greater, &s("b"), &s("abc")));
    }

    #[test]
    fn test_no_string_number_coercion() {
        assert!(!compare(&BinaryOp::Equal, &s("1"), &V::Integer(1)));
        assert!(compare(&BinaryOp::NotEqual, &s("1"), &V::Integer(1)));
        assert!(!compare(&BinaryOp::Less, &s("1"), &V::Integer(2)));
        assert!(!compare(&BinaryOp::Greater, &s("1"), &V::Integer(2)));
    }

    #[test]
    fn test_booleans_and_null_support_equality_only() {
        assert!(compare(&BinaryOp::Equal, &V::Bool(true), &V::Bool(true)));
        assert!(!compare(&BinaryOp::Greater, &V::Bool(true), &V::Bool(false)));
        assert!(compare(&BinaryOp::Equal, &V::Null, &V::Null));
        assert!(!compare(&BinaryOp::Equal, &V::Null, &V::Bool(false)));
        assert!(!compare(&BinaryOp::LessEq, &V::Null, &V::Null));
    }

    #[test]
    fn test_absent_equals_nothing() {
        assert!(!compare(&BinaryOp::Equal, &V::Missing, &V::Missing));
        assert!(compare(&BinaryOp::NotEqual, &V::Missing, &V::Null));
        assert!(!compare(&BinaryOp::Less, &V::Missing, &V::Integer(1)));
    }

    #[test]
    fn test_composites_compare_structurally() {
        let a = json!({"x": [1, 2]});
        let b = json!({"x": [1, 2]});
        assert!(compare(&BinaryOp::Equal, &V::Node(&a), &V::Node(&b)));
        assert!(!compare(&BinaryOp::Less, &V::Node(&a), &V::Node(&b)));
    }

    #[test]
    fn test_string_operators_stringify_operands() {
        assert!(string_test(&BinaryOp::Contains, &V::Integer(12345), &s("234")));
        assert!(string_test(&BinaryOp::StartsWith, &V::Bool(true), &s("tr")));
        assert!(string_test(&BinaryOp::EndsWith, &s("file.rs"), &s(".rs")));
        assert!(!string_test(&BinaryOp::Contains, &V::Missing, &s("")));
        let tags = json!(["red", "blue"]);
        assert!(string_test(&BinaryOp::Contains, &V::Node(&tags), &s("blue")));
    }
}
