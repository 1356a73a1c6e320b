//! Document model the evaluator navigates
//!
//! A document value answers one question: is it a map, a list or a scalar.
//! The evaluator pattern-matches on [`Node`] and never inspects storage.

mod json;

use std::fmt;

/// A tree value that can be queried
///
/// `Display` renders maps and lists for string operators in filters.
pub trait Document: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// View this value as a map, list or scalar
    fn node(&self) -> Node<'_, Self>;
}

/// Borrowed three-way view of a document value
pub enum Node<'a, D> {
    /// Key/value pairs in insertion order
    Map(&'a dyn MapAccess<D>),
    /// Sequenced, indexable elements
    List(&'a [D]),
    /// Leaf value
    Scalar(Scalar<'a>),
}

impl<D> Clone for Node<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Node<'_, D> {}

/// Ordered key access over a map value
pub trait MapAccess<D> {
    /// Value stored under `key`
    fn lookup(&self, key: &str) -> Option<&D>;

    /// Entries in insertion order
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &D)> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Leaf values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(&'a str),
}

impl<'a, D: Document> Node<'a, D> {
    /// Type name reported by the `type()` filter function
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Map(_) => "object",
            Node::List(_) => "array",
            Node::Scalar(Scalar::Null) => "null",
            Node::Scalar(Scalar::Bool(_)) => "boolean",
            Node::Scalar(Scalar::Integer(_) | Scalar::Float(_)) => "number",
            Node::Scalar(Scalar::String(_)) => "string",
        }
    }

    /// Direct children in document order: map values or list elements
    pub fn children(self) -> Box<dyn Iterator<Item = &'a D> + 'a> {
        match self {
            Node::Map(map) => Box::new(map.entries().map(|(_, value)| value)),
            Node::List(items) => Box::new(items.iter()),
            Node::Scalar(_) => Box::new(std::iter::empty()),
        }
    }
}
