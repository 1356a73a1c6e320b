//! Recursive descent (`..`) traversal

use super::{context::EvalContext, core::Cursor, selectors::trace_truncated};
use crate::document::{Document, Node};

/// Pre-order walk below `value` in document order
///
/// With a name, collects values stored under that map key at any depth,
/// including keys of `value` itself. Without one, collects every descendant
/// node; `value` itself is not a candidate. Stops descending at the
/// context's depth limit.
pub(super) fn descend<'a, D: Document>(
    value: &'a D,
    context: EvalContext<'a, D>,
    name: Option<&str>,
    out: &mut Vec<Cursor<'a, D>>,
) {
    let Some(child_context) = context.child() else {
        trace_truncated(context.depth());
        return;
    };

    match value.node() {
        Node::Map(map) => {
            for (key, child) in map.entries() {
                if name.is_none_or(|wanted| wanted == key) {
                    out.push(Cursor::new(child, child_context));
                }
                descend(child, child_context, name, out);
            }
        }
        Node::List(items) => {
            for child in items {
                if name.is_none() {
                    out.push(Cursor::new(child, child_context));
                }
                descend(child, child_context, name, out);
            }
        }
        Node::Scalar(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn collect(document: &Value, name: Option<&str>, max_depth: usize) -> Vec<Value> {
        let mut out = Vec::new();
        descend(document, EvalContext::root(document, max_depth), name, &mut out);
        out.into_iter().map(|cursor| cursor.value.clone()).collect()
    }

    #[test]
    fn test_named_descent_includes_own_keys_in_document_order() {
        let document = json!({"a": 1, "b": {"a": 2, "c": [{"a": 3}]}});
        assert_eq!(collect(&document, Some("a"), 100), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_unnamed_descent_is_preorder_and_excludes_origin() {
        let document = json!({"x": [1, 2], "y": 3});
        assert_eq!(
            collect(&document, None, 100),
            vec![json!([1, 2]), json!(1), json!(2), json!(3)]
        );
    }

    #[test]
    fn test_descent_stops_at_max_depth() {
        let document = json!({"a": {"a": {"a": 1}}});
        assert_eq!(collect(&document, Some("a"), 1).len(), 1);
        assert_eq!(collect(&document, Some("a"), 0).len(), 0);
    }
}
