//! Path expression Abstract Syntax Tree (AST) definitions
//!
//! Core type definitions for representing path expressions as structured
//! data. Nodes are immutable after parsing and owned by the parse result.

/// Individual path node
#[derive(Debug, Clone, PartialEq)]
pub enum PathNode {
    /// Root selector ($)
    Root,

    /// Map key access (.name or ["name"])
    Property(String),

    /// List index access ([0], [-1])
    Index(i64),

    /// Every child of a list or map ([*] or .*)
    Wildcard,

    /// Recursive descent (..name, ..*, ..)
    Recursive(Option<String>),

    /// List slice ([start:end:step], any part optional)
    Slice {
        /// Start index (None means the step-dependent default)
        start: Option<i64>,
        /// Exclusive end index (None means the step-dependent default)
        end: Option<i64>,
        /// Step (None means 1)
        step: Option<i64>,
    },

    /// Filter over list elements ([?(...)])
    Filter(FilterExpression),
}

impl PathNode {
    /// Whether this node can yield zero or many results
    #[inline]
    #[must_use]
    pub fn is_multiplying(&self) -> bool {
        matches!(
            self,
            PathNode::Wildcard
                | PathNode::Recursive(_)
                | PathNode::Slice { .. }
                | PathNode::Filter(_)
        )
    }
}

/// A path node with the source position of its first token
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub node: PathNode,
    pub position: usize,
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn new(node: PathNode, position: usize) -> Self {
        Self { node, position }
    }
}

/// A parsed path: the ordered segment sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathAst {
    segments: Vec<Segment>,
}

impl PathAst {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build an AST from bare nodes, positions set to zero
    #[must_use]
    pub fn from_nodes(nodes: impl IntoIterator<Item = PathNode>) -> Self {
        Self {
            segments: nodes.into_iter().map(|node| Segment::new(node, 0)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the nodes without positions
    pub fn nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.segments.iter().map(|segment| &segment.node)
    }

    /// Node sequence with a leading `Root` removed
    ///
    /// `users[0]` and `$.users[0]` evaluate identically; this is the form the
    /// round-trip law compares.
    #[must_use]
    pub fn normalized_nodes(&self) -> Vec<&PathNode> {
        let mut nodes: Vec<&PathNode> = self.nodes().collect();
        if matches!(nodes.first(), Some(PathNode::Root)) {
            nodes.remove(0);
        }
        nodes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Filter expression AST for `[?(...)]` predicates
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// Literal values (strings, numbers, booleans, null)
    Literal(Literal),

    /// Property path rooted at the current item; empty path is `@` itself
    PropertyRef(Vec<String>),

    /// Binary operation
    Binary {
        operator: BinaryOp,
        left: Box<FilterExpression>,
        right: Box<FilterExpression>,
    },

    /// Unary operation
    Unary {
        operator: UnaryOp,
        operand: Box<FilterExpression>,
    },

    /// Function call by name
    Call {
        name: String,
        args: Vec<FilterExpression>,
    },
}

/// Filter expression literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

/// Binary operators for filter expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Equality comparison (==)
    Equal,
    /// Inequality comparison (!=)
    NotEqual,
    /// Less than comparison (<)
    Less,
    /// Less than or equal comparison (<=)
    LessEq,
    /// Greater than comparison (>)
    Greater,
    /// Greater than or equal comparison (>=)
    GreaterEq,
    /// Logical AND operator (&&)
    And,
    /// Logical OR operator (||)
    Or,
    /// Substring test (contains)
    Contains,
    /// Prefix test (startsWith)
    StartsWith,
    /// Suffix test (endsWith)
    EndsWith,
    /// Regular expression match (matches)
    Matches,
    /// Operator registered by name with the evaluator
    Custom(String),
}

impl BinaryOp {
    /// Precedence tier; higher binds tighter
    #[inline]
    #[must_use]
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            _ => 3,
        }
    }

    /// Source text of the operator
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Contains => "contains",
            BinaryOp::StartsWith => "startsWith",
            BinaryOp::EndsWith => "endsWith",
            BinaryOp::Matches => "matches",
            BinaryOp::Custom(name) => name,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Unary operators for filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation (!)
    Not,
}

impl UnaryOp {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
        }
    }
}

impl FilterExpression {
    /// Calculate complexity score for filter expressions
    #[inline]
    #[must_use]
    pub fn complexity_score(&self) -> u32 {
        match self {
            FilterExpression::Literal(_) => 1,
            FilterExpression::PropertyRef(path) => {
                u32::try_from(path.len()).unwrap_or(u32::MAX).max(1)
            }
            FilterExpression::Binary {
                operator,
                left,
                right,
            } => {
                let base = match operator {
                    BinaryOp::And | BinaryOp::Or => 3,
                    // Regex operations are more expensive
                    BinaryOp::Matches => 5,
                    _ => 2,
                };
                base + left.complexity_score() + right.complexity_score()
            }
            FilterExpression::Unary { operand, .. } => 1 + operand.complexity_score(),
            FilterExpression::Call { args, .. } => {
                5 + args
                    .iter()
                    .map(FilterExpression::complexity_score)
                    .sum::<u32>()
            }
        }
    }

    /// Visit this expression and every sub-expression, parents first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a FilterExpression)) {
        let mut pending = vec![self];
        while let Some(expression) = pending.pop() {
            visit(expression);
            // children pushed in reverse so the leftmost is visited next
            match expression {
                FilterExpression::Binary { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                }
                FilterExpression::Unary { operand, .. } => pending.push(operand),
                FilterExpression::Call { args, .. } => pending.extend(args.iter().rev()),
                FilterExpression::Literal(_) | FilterExpression::PropertyRef(_) => {}
            }
        }
    }

    /// Height of the expression tree; a lone literal or property is 1
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((expression, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match expression {
                FilterExpression::Binary { left, right, .. } => {
                    pending.push((left.as_ref(), depth + 1));
                    pending.push((right.as_ref(), depth + 1));
                }
                FilterExpression::Unary { operand, .. } => {
                    pending.push((operand.as_ref(), depth + 1));
                }
                FilterExpression::Call { args, .. } => {
                    pending.extend(args.iter().map(|arg| (arg, depth + 1)));
                }
                FilterExpression::Literal(_) | FilterExpression::PropertyRef(_) => {}
            }
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negated(times: usize) -> FilterExpression {
        let mut expression = FilterExpression::PropertyRef(vec!["a".into()]);
        for _ in 0..times {
            expression = FilterExpression::Unary {
                operator: UnaryOp::Not,
                operand: Box::new(expression),
            };
        }
        expression
    }

    #[test]
    fn test_depth_counts_levels() {
        assert_eq!(FilterExpression::Literal(Literal::Null).depth(), 1);
        assert_eq!(negated(3).depth(), 4);

        let call = FilterExpression::Call {
            name: "f".into(),
            args: vec![negated(2), FilterExpression::Literal(Literal::Integer(1))],
        };
        assert_eq!(call.depth(), 4);
    }

    #[test]
    fn test_walk_visits_parents_first() {
        let expression = FilterExpression::Binary {
            operator: BinaryOp::And,
            left: Box::new(negated(1)),
            right: Box::new(FilterExpression::Literal(Literal::Boolean(true))),
        };
        let mut kinds = Vec::new();
        expression.walk(&mut |node| {
            kinds.push(match node {
                FilterExpression::Binary { .. } => "binary",
                FilterExpression::Unary { .. } => "unary",
                FilterExpression::PropertyRef(_) => "property",
                FilterExpression::Literal(_) => "literal",
                FilterExpression::Call { .. } => "call",
            });
        });
        assert_eq!(kinds, ["binary", "unary", "property", "literal"]);
    }
}
