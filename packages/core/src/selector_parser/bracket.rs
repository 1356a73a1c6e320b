//! Bracket-notation body parsing

use super::core::SelectorParser;
use crate::{
    ast::PathNode,
    error::{PathResult, parse_error},
    filter_parser::FilterParser,
    tokens::TokenKind,
};

/// Parse the body after `[`, including the closing `]`
pub fn parse_bracket_body(parser: &mut SelectorParser, open: usize) -> PathResult<PathNode> {
    let token = parser.next_token()?;
    let node = match token.kind {
        TokenKind::Star => PathNode::Wildcard,
        TokenKind::Question => {
            let mut filter_parser =
                FilterParser::new(parser.tokens, parser.end, parser.max_filter_depth);
            PathNode::Filter(filter_parser.parse_filter_expression()?)
        }
        TokenKind::String(name) => PathNode::Property(name),
        TokenKind::Integer(index) => {
            if matches!(parser.peek_kind(), Some(TokenKind::Colon)) {
                parser.consume_token();
                return super::slice::parse_slice_rest(parser, Some(index));
            }
            PathNode::Index(index)
        }
        TokenKind::Colon => return super::slice::parse_slice_rest(parser, None),
        TokenKind::RightBracket => {
            return Err(parse_error("empty brackets are not allowed", "']'", open));
        }
        _ => {
            return Err(parse_error(
                "expected '*', '?', string, integer or slice inside brackets",
                token.describe(),
                token.position,
            ));
        }
    };
    parser.expect_token(TokenKind::RightBracket)?;
    Ok(node)
}
