//! Slice parsing: `[start?:end?:step?]`

use super::core::SelectorParser;
use crate::{ast::PathNode, error::PathResult, tokens::TokenKind};

/// Parse the remainder of a slice after its first `:`, through `]`
pub fn parse_slice_rest(parser: &mut SelectorParser, start: Option<i64>) -> PathResult<PathNode> {
    let end = take_integer(parser);

    let step = if matches!(parser.peek_kind(), Some(TokenKind::Colon)) {
        parser.consume_token();
        take_integer(parser)
    } else {
        None
    };

    parser.expect_token(TokenKind::RightBracket)?;
    Ok(PathNode::Slice { start, end, step })
}

fn take_integer(parser: &mut SelectorParser) -> Option<i64> {
    match parser.peek_kind() {
        Some(&TokenKind::Integer(value)) => {
            parser.consume_token();
            Some(value)
        }
        _ => None,
    }
}
