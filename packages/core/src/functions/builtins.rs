//! Built-in filter functions

use std::borrow::Cow;

use crate::{
    document::{Document, Node},
    filter::FilterValue,
};

/// Argument count of a built-in function, `None` for other names
#[must_use]
pub fn builtin_arity(name: &str) -> Option<usize> {
    match name {
        "length" | "exists" | "type" => Some(1),
        _ => None,
    }
}

/// Call a built-in; `None` when `name` is not one or the arity is wrong
pub fn call_builtin<'a, D: Document>(
    name: &str,
    args: &[FilterValue<'a, D>],
) -> Option<FilterValue<'a, D>> {
    let [argument] = args else {
        return None;
    };
    Some(match name {
        "length" => length(argument),
        "exists" => FilterValue::Bool(!argument.is_missing()),
        "type" => FilterValue::String(Cow::Borrowed(argument.type_name())),
        _ => return None,
    })
}

#[allow(clippy::cast_possible_wrap)]
fn length<'a, D: Document>(argument: &FilterValue<'a, D>) -> FilterValue<'a, D> {
    let count = match argument {
        FilterValue::String(text) => text.chars().count(),
        FilterValue::Node(document) => match document.node() {
            Node::Map(map) => map.len(),
            Node::List(items) => items.len(),
            Node::Scalar(_) => return FilterValue::Null,
        },
        _ => return FilterValue::Null,
    };
    FilterValue::Integer(count as i64)
}
