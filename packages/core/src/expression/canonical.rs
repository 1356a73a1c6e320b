//! Canonical path text
//!
//! Printing always starts with `$`, uses `.name` for identifier names and
//! `["..."]` otherwise, and parenthesizes filter sub-expressions only where
//! operator precedence requires it. Re-parsing the output yields the same
//! node sequence, so the text doubles as the cache key.

use std::fmt::{self, Write};

use crate::{
    ast::{FilterExpression, Literal, PathAst, PathNode},
    tokens::TokenMatcher,
};

/// Serialize a path to its canonical text
#[must_use]
pub fn ast_to_string(ast: &PathAst) -> String {
    ast.to_string()
}

impl fmt::Display for PathAst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('$')?;
        for node in self.nodes() {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathNode::Root => Ok(()),
            PathNode::Property(name) => {
                if is_bare_name(name) {
                    write!(f, ".{name}")
                } else {
                    f.write_char('[')?;
                    write_quoted(f, name)?;
                    f.write_char(']')
                }
            }
            PathNode::Index(index) => write!(f, "[{index}]"),
            PathNode::Wildcard => f.write_str("[*]"),
            PathNode::Recursive(None) => f.write_str("..*"),
            PathNode::Recursive(Some(name)) => {
                f.write_str("..")?;
                if is_bare_name(name) {
                    f.write_str(name)
                } else {
                    write_quoted(f, name)
                }
            }
            PathNode::Slice { start, end, step } => {
                f.write_char('[')?;
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                f.write_char(':')?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                if let Some(step) = step {
                    write!(f, ":{step}")?;
                }
                f.write_char(']')
            }
            PathNode::Filter(expression) => write!(f, "[?({expression})]"),
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Literal(literal) => write!(f, "{literal}"),
            FilterExpression::PropertyRef(path) => {
                f.write_char('@')?;
                for name in path {
                    if is_bare_name(name) {
                        write!(f, ".{name}")?;
                    } else {
                        f.write_char('[')?;
                        write_quoted(f, name)?;
                        f.write_char(']')?;
                    }
                }
                Ok(())
            }
            FilterExpression::Binary {
                operator,
                left,
                right,
            } => {
                let precedence = operator.precedence();
                write_operand(f, left, binding_precedence(left) < precedence)?;
                write!(f, " {} ", operator.symbol())?;
                write_operand(f, right, binding_precedence(right) <= precedence)
            }
            FilterExpression::Unary { operator, operand } => {
                f.write_str(operator.symbol())?;
                write_operand(f, operand, binding_precedence(operand) != u8::MAX)
            }
            FilterExpression::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_char(')')
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write_quoted(f, value),
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Float(value) => write_float(f, *value),
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// Precedence an expression binds with; primaries and unary bind tightest
fn binding_precedence(expression: &FilterExpression) -> u8 {
    match expression {
        FilterExpression::Binary { operator, .. } => operator.precedence(),
        _ => u8::MAX,
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &FilterExpression,
    parenthesize: bool,
) -> fmt::Result {
    if parenthesize {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

fn is_bare_name(name: &str) -> bool {
    TokenMatcher::is_plain_identifier(name)
}

/// Floats always carry a decimal point so they re-lex as decimals
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        write!(f, "{text}.0")
    } else {
        f.write_str(&text)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::PathParser;

    fn canonical(path: &str) -> String {
        ast_to_string(&PathParser::compile(path).expect("Failed to compile path"))
    }

    #[test]
    fn test_canonical_always_rooted() {
        assert_eq!(canonical("users[0].name"), "$.users[0].name");
        assert_eq!(canonical("$['users'][-1]"), "$.users[-1]");
    }

    #[test]
    fn test_odd_names_are_bracketed() {
        assert_eq!(canonical("$['first name']"), "$[\"first name\"]");
        assert_eq!(canonical("$['say \"hi\"']"), "$[\"say \\\"hi\\\"\"]");
        assert_eq!(canonical("$['$']"), "$[\"$\"]");
        assert_eq!(canonical("$..'odd key'"), "$..\"odd key\"");
    }

    #[test]
    fn test_wildcard_and_recursive_spellings_converge() {
        assert_eq!(canonical("$.a.*"), canonical("$.a[*]"));
        assert_eq!(canonical("$.."), "$..*");
        assert_eq!(canonical("$..[0]"), "$..*[0]");
    }

    #[test]
    fn test_slices() {
        assert_eq!(canonical("$[::-1]"), "$[::-1]");
        assert_eq!(canonical("$[1:]"), "$[1:]");
        assert_eq!(canonical("$[7:3:-1]"), "$[7:3:-1]");
    }

    #[test]
    fn test_minimal_parentheses() {
        assert_eq!(
            canonical("$[?((@.a == 1) || (@.b == 2 && @.c))]"),
            "$[?(@.a == 1 || @.b == 2 && @.c)]"
        );
        assert_eq!(
            canonical("$[?((@.a || @.b) && @.c)]"),
            "$[?((@.a || @.b) && @.c)]"
        );
        assert_eq!(
            canonical("$[?(@.a || (@.b || @.c))]"),
            "$[?(@.a || (@.b || @.c))]"
        );
        assert_eq!(canonical("$[?(!(@.a && @.b))]"), "$[?(!(@.a && @.b))]");
    }

    #[test]
    fn test_float_literals_keep_decimal_point() {
        assert_eq!(canonical("$[?(@.a > 2.0)]"), "$[?(@.a > 2.0)]");
        assert_eq!(canonical("$[?(@.a > 1e2)]"), "$[?(@.a > 100.0)]");
        assert_eq!(canonical("$[?(@.a > 2)]"), "$[?(@.a > 2)]");
    }

    #[test]
    fn test_canonical_reparses_to_same_nodes() {
        for path in [
            "store.book[?(@.price < 10 && @.tags contains 'x')].title",
            "$..author",
            "$[?(length(@.items) >= 2 || !@.hidden)]",
            "$[?(@['odd key'] fuzzy \"val\")]",
        ] {
            let ast = PathParser::compile(path).expect("Failed to compile path");
            let reparsed =
                PathParser::compile(&ast_to_string(&ast)).expect("Failed to compile canonical");
            assert_eq!(ast.normalized_nodes(), reparsed.normalized_nodes());
        }
    }
}
