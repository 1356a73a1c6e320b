//! Values produced while evaluating filter expressions

use std::borrow::Cow;

use crate::{
    ast::Literal,
    document::{Document, Node, Scalar},
};

/// Result of evaluating a filter sub-expression against the current item
///
/// `Node` holds maps and lists borrowed from the document; scalars are
/// lifted into their own variants by [`FilterValue::from_document`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue<'a, D> {
    /// Property not present on the current item
    Missing,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(Cow<'a, str>),
    Node(&'a D),
}

impl<'a, D: Document> FilterValue<'a, D> {
    /// Lift a document value, borrowing strings and composites
    pub fn from_document(document: &'a D) -> Self {
        match document.node() {
            Node::Scalar(Scalar::Null) => FilterValue::Null,
            Node::Scalar(Scalar::Bool(value)) => FilterValue::Bool(value),
            Node::Scalar(Scalar::Integer(value)) => FilterValue::Integer(value),
            Node::Scalar(Scalar::Float(value)) => FilterValue::Float(value),
            Node::Scalar(Scalar::String(value)) => FilterValue::String(Cow::Borrowed(value)),
            Node::Map(_) | Node::List(_) => FilterValue::Node(document),
        }
    }

    /// Lift a `Node` that wraps a scalar; other variants are returned as is
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            FilterValue::Node(document) => Self::from_document(document),
            other => other,
        }
    }

    /// Truthiness: non-zero numbers, non-empty strings, every map and list
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::Missing | FilterValue::Null => false,
            FilterValue::Bool(value) => *value,
            FilterValue::Integer(value) => *value != 0,
            FilterValue::Float(value) => *value != 0.0,
            FilterValue::String(value) => !value.is_empty(),
            FilterValue::Node(_) => true,
        }
    }

    /// Text used by the string operators; `None` when the value is missing
    #[must_use]
    pub fn stringify(&self) -> Option<Cow<'_, str>> {
        Some(match self {
            FilterValue::Missing => return None,
            FilterValue::Null => Cow::Borrowed("null"),
            FilterValue::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
            FilterValue::Integer(value) => Cow::Owned(value.to_string()),
            FilterValue::Float(value) => Cow::Owned(value.to_string()),
            FilterValue::String(value) => Cow::Borrowed(value.as_ref()),
            FilterValue::Node(document) => Cow::Owned(document.to_string()),
        })
    }

    /// Type name reported by `type()`
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Missing => "absent",
            FilterValue::Null => "null",
            FilterValue::Bool(_) => "boolean",
            FilterValue::Integer(_) | FilterValue::Float(_) => "number",
            FilterValue::String(_) => "string",
            FilterValue::Node(document) => document.node().type_name(),
        }
    }

    /// Numeric view for custom operators and functions
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FilterValue::Integer(value) => Some(*value as f64),
            FilterValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, FilterValue::Missing)
    }

    /// Value of a literal from the expression tree
    pub fn from_literal(literal: &'a Literal) -> Self {
        match literal {
            Literal::String(value) => FilterValue::String(Cow::Borrowed(value)),
            Literal::Integer(value) => FilterValue::Integer(*value),
            Literal::Float(value) => FilterValue::Float(*value),
            Literal::Boolean(value) => FilterValue::Bool(*value),
            Literal::Null => FilterValue::Null,
        }
    }
}

impl<D> From<bool> for FilterValue<'_, D> {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl<D> From<i64> for FilterValue<'_, D> {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl<D> From<String> for FilterValue<'_, D> {
    fn from(value: String) -> Self {
        FilterValue::String(Cow::Owned(value))
    }
}
