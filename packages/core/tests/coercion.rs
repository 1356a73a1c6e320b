//! Filter comparison semantics across value types

use serde_json::{Value, json};
use treepath_core::{EvaluateOptions, Evaluator, PathParser};

/// Number of elements of `items` kept by `filter`
fn kept(items: &Value, filter: &str) -> usize {
    let ast = PathParser::compile(&format!("$[?({filter})]")).expect("Failed to compile path");
    Evaluator::new()
        .evaluate(items, &ast, &EvaluateOptions::default())
        .expect("Failed to evaluate")
        .into_vec()
        .len()
}

#[cfg(test)]
mod coercion_tests {
    use super::*;

    #[test]
    fn test_integers_and_floats_compare_numerically() {
        let items = json!([{"v": 1}, {"v": 1.0}, {"v": 1.5}]);
        assert_eq!(kept(&items, "@.v == 1"), 2);
        assert_eq!(kept(&items, "@.v < 1.5"), 2);
        assert_eq!(kept(&items, "@.v >= 1"), 3);
    }

    #[test]
    fn test_strings_are_never_coerced_to_numbers() {
        let items = json!([{"v": "1"}, {"v": 1}]);
        assert_eq!(kept(&items, "@.v == 1"), 1);
        assert_eq!(kept(&items, "@.v == '1'"), 1);
        assert_eq!(kept(&items, "@.v > 0"), 1);
    }

    #[test]
    fn test_strings_order_by_code_point() {
        let items = json!([{"v": "apple"}, {"v": "Banana"}, {"v": "cherry"}]);
        assert_eq!(kept(&items, "@.v < 'b'"), 2);
    }

    #[test]
    fn test_bool_and_null_support_equality_only() {
        let items = json!([{"v": true}, {"v": false}, {"v": null}]);
        assert_eq!(kept(&items, "@.v == true"), 1);
        assert_eq!(kept(&items, "@.v == null"), 1);
        assert_eq!(kept(&items, "@.v > false"), 0);
        assert_eq!(kept(&items, "@.v != null"), 2);
    }

    #[test]
    fn test_missing_properties_match_nothing_but_inequality() {
        let items = json!([{"a": 1}, {}]);
        assert_eq!(kept(&items, "@.a == null"), 0);
        assert_eq!(kept(&items, "@.a != 1"), 1);
        assert_eq!(kept(&items, "@.a < 5"), 1);
        assert_eq!(kept(&items, "exists(@.a)"), 1);
        assert_eq!(kept(&items, "type(@.a) == 'absent'"), 1);
    }

    #[test]
    fn test_composites_compare_structurally() {
        let items = json!([{"v": [1, 2]}, {"v": [2, 1]}, {"v": {"k": 1}}]);
        assert_eq!(kept(&items, "@.v == @.v"), 3);
        assert_eq!(kept(&items, "length(@.v) == 2"), 2);
        assert_eq!(kept(&items, "type(@.v) == 'object'"), 1);
    }

    #[test]
    fn test_truthiness_of_bare_values() {
        let items = json!([
            {"v": 0}, {"v": 2}, {"v": ""}, {"v": "x"},
            {"v": []}, {"v": {}}, {"v": null}, {"v": false}
        ]);
        assert_eq!(kept(&items, "@.v"), 4);
        assert_eq!(kept(&items, "!@.v"), 4);
    }

    #[test]
    fn test_unknown_functions_and_operators_are_false() {
        let items = json!([{"v": 1}]);
        assert_eq!(kept(&items, "mystery(@.v)"), 0);
        assert_eq!(kept(&items, "@.v fuzzy 1"), 0);
        assert_eq!(kept(&items, "!mystery(@.v)"), 1);
    }
}
