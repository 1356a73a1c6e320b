//! Core segment parser and token cursor helpers

use std::collections::VecDeque;

use crate::{
    ast::{PathNode, Segment},
    error::{PathResult, parse_error},
    tokens::{Token, TokenKind, TokenMatcher},
};

/// Parser for individual path segments
pub struct SelectorParser<'a> {
    pub(crate) tokens: &'a mut VecDeque<Token>,
    pub(crate) end: usize,
    pub(crate) max_filter_depth: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a segment parser over a token queue; `end` is the input length
    #[inline]
    pub fn new(tokens: &'a mut VecDeque<Token>, end: usize, max_filter_depth: usize) -> Self {
        Self {
            tokens,
            end,
            max_filter_depth,
        }
    }

    /// Whether only `Eof` remains
    #[inline]
    pub fn at_end(&self) -> bool {
        matches!(self.peek_kind(), None | Some(TokenKind::Eof))
    }

    /// Parse the leading `$` or implicit first property, if present
    pub fn parse_head(&mut self) -> PathResult<Option<Segment>> {
        let Some(token) = self.peek_token() else {
            return Ok(None);
        };
        let position = token.position;
        match &token.kind {
            TokenKind::Root => {
                self.consume_token();
                Ok(Some(Segment::new(PathNode::Root, position)))
            }
            kind => match kind.word() {
                Some(name) => {
                    let name = name.to_string();
                    self.consume_token();
                    Ok(Some(Segment::new(PathNode::Property(name), position)))
                }
                None => Ok(None),
            },
        }
    }

    /// Parse one segment: `.member`, `..member?` or `[bracket]`
    pub fn parse_segment(&mut self) -> PathResult<Segment> {
        let token = self.next_token()?;
        let position = token.position;
        let node = match token.kind {
            TokenKind::Dot => super::dot::parse_dot_member(self)?,
            TokenKind::DoubleDot => super::dot::parse_recursive_member(self)?,
            TokenKind::LeftBracket => super::bracket::parse_bracket_body(self, position)?,
            TokenKind::At => {
                return Err(parse_error(
                    "'@' is only valid inside filter expressions",
                    token.describe(),
                    position,
                ));
            }
            _ => {
                return Err(parse_error(
                    "expected '.', '..' or '[' to start a path segment",
                    token.describe(),
                    position,
                ));
            }
        };
        Ok(Segment::new(node, position))
    }

    /// Peek at next token without consuming
    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.front().map(|token| &token.kind)
    }

    /// Consume and return next token
    #[inline]
    pub(crate) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Consume the next token, failing at the end of the queue
    pub(crate) fn next_token(&mut self) -> PathResult<Token> {
        self.consume_token()
            .ok_or_else(|| parse_error("unexpected end of input", "end of input", self.end))
    }

    /// Expect a token of the given kind and consume it
    pub(crate) fn expect_token(&mut self, expected: TokenKind) -> PathResult<Token> {
        let token = self.next_token()?;
        if TokenMatcher::tokens_match(&token.kind, &expected) {
            Ok(token)
        } else {
            Err(parse_error(
                format!("expected '{}'", expected.as_debug_str()),
                token.describe(),
                token.position,
            ))
        }
    }
}
