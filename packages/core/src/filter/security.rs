//! Filter security checks
//!
//! Property names that reach prototype or constructor slots in host
//! runtimes are refused outright, and regular expressions pass a guard
//! against catastrophic backtracking shapes before they are compiled.

use crate::{
    ast::{BinaryOp, FilterExpression, Literal},
    error::{PathResult, security_error},
};

/// Property names refused inside filters
pub const DENIED_PROPERTIES: [&str; 3] = ["__proto__", "prototype", "constructor"];

/// Longest accepted `matches` pattern, in characters
pub const MAX_PATTERN_LENGTH: usize = 256;

/// Deepest accepted group nesting in a `matches` pattern
pub const MAX_GROUP_NESTING: usize = 8;

/// Refuse a property name on the deny list
///
/// # Errors
///
/// Returns a `Security` error naming the property.
pub fn check_property_name(name: &str) -> PathResult<()> {
    if DENIED_PROPERTIES.contains(&name) {
        log::warn!("rejected filter access to denied property '{name}'");
        return Err(security_error(format!(
            "access to property '{name}' is not allowed in filters"
        )));
    }
    Ok(())
}

/// Scan a whole filter before any element is visited
///
/// Checks every property reference against the deny list and guards every
/// literal `matches` pattern.
///
/// # Errors
///
/// Returns the first `Security` error found.
pub fn scan_filter(expression: &FilterExpression) -> PathResult<()> {
    let mut outcome = Ok(());
    expression.walk(&mut |node| {
        if outcome.is_err() {
            return;
        }
        outcome = match node {
            FilterExpression::PropertyRef(path) => path
                .iter()
                .try_for_each(|name| check_property_name(name)),
            FilterExpression::Binary {
                operator: BinaryOp::Matches,
                right,
                ..
            } => match right.as_ref() {
                FilterExpression::Literal(Literal::String(pattern)) => guard_pattern(pattern),
                _ => Ok(()),
            },
            _ => Ok(()),
        };
    });
    outcome
}

/// Reject patterns prone to catastrophic backtracking
///
/// Refuses patterns longer than [`MAX_PATTERN_LENGTH`], with groups nested
/// deeper than [`MAX_GROUP_NESTING`], or with a repeated group (`+`, `*` or
/// `{..}`) whose body already contains an unbounded quantifier, such as
/// `(a+)+`, `(a*)*` or `(a+){2,}`.
///
/// # Errors
///
/// Returns a `Security` error describing the rejected shape.
pub fn guard_pattern(pattern: &str) -> PathResult<()> {
    let chars: Vec<char> = pattern.chars().collect();
    if chars.len() > MAX_PATTERN_LENGTH {
        return Err(reject(
            pattern,
            format!("pattern longer than {MAX_PATTERN_LENGTH} characters"),
        ));
    }

    // one flag per open group: does its body hold an unbounded quantifier
    let mut groups: Vec<bool> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' => i = skip_class(&chars, i),
            '(' => {
                groups.push(false);
                if groups.len() > MAX_GROUP_NESTING {
                    return Err(reject(
                        pattern,
                        format!("groups nested deeper than {MAX_GROUP_NESTING}"),
                    ));
                }
            }
            ')' => {
                let inner_unbounded = groups.pop().unwrap_or(false);
                let repeated = matches!(chars.get(i + 1), Some('+' | '*' | '{'));
                if inner_unbounded && repeated {
                    return Err(reject(
                        pattern,
                        "repeated group contains an unbounded quantifier".to_string(),
                    ));
                }
                if inner_unbounded {
                    mark_unbounded(&mut groups);
                }
            }
            '+' | '*' => mark_unbounded(&mut groups),
            '{' => {
                let close = chars[i..].iter().position(|&c| c == '}').map(|p| i + p);
                if let Some(close) = close {
                    if chars[i + 1..close].ends_with(&[',']) {
                        mark_unbounded(&mut groups);
                    }
                    i = close;
                }
            }
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

fn mark_unbounded(groups: &mut [bool]) {
    if let Some(innermost) = groups.last_mut() {
        *innermost = true;
    }
}

/// Index of the `]` closing the class opened at `open`
fn skip_class(chars: &[char], open: usize) -> usize {
    let mut i = open + 1;
    if chars.get(i) == Some(&'^') {
        i += 1;
    }
    // a leading `]` is literal
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() && chars[i] != ']' {
        if chars[i] == '\\' {
            i += 1;
        }
        i += 1;
    }
    i
}

fn reject(pattern: &str, reason: String) -> crate::error::PathError {
    log::warn!("rejected regular expression '{pattern}': {reason}");
    security_error(format!("regular expression rejected: {reason}"))
}
