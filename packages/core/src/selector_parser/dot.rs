//! Dot-notation and recursive descent member parsing

use super::core::SelectorParser;
use crate::{
    ast::PathNode,
    error::{PathResult, parse_error},
    tokens::TokenKind,
};

/// Parse the member after `.`: a name or `*`
pub fn parse_dot_member(parser: &mut SelectorParser) -> PathResult<PathNode> {
    let token = parser.next_token()?;
    if let Some(name) = token.kind.word() {
        return Ok(PathNode::Property(name.to_string()));
    }
    match token.kind {
        TokenKind::Star => Ok(PathNode::Wildcard),
        _ => Err(parse_error(
            "expected property name or '*' after '.'",
            token.describe(),
            token.position,
        )),
    }
}

/// Parse the optional member after `..`
///
/// A name or quoted name selects that key at any depth; `*`, `[` or the end
/// of the path select every descendant.
pub fn parse_recursive_member(parser: &mut SelectorParser) -> PathResult<PathNode> {
    let Some(token) = parser.peek_token() else {
        return Ok(PathNode::Recursive(None));
    };
    if let Some(name) = token.kind.word() {
        let name = name.to_string();
        parser.consume_token();
        return Ok(PathNode::Recursive(Some(name)));
    }
    match &token.kind {
        TokenKind::String(name) => {
            let name = name.clone();
            parser.consume_token();
            Ok(PathNode::Recursive(Some(name)))
        }
        TokenKind::Star => {
            parser.consume_token();
            Ok(PathNode::Recursive(None))
        }
        TokenKind::LeftBracket | TokenKind::Eof => Ok(PathNode::Recursive(None)),
        _ => Err(parse_error(
            "expected property name, '*' or '[' after '..'",
            token.describe(),
            token.position,
        )),
    }
}
