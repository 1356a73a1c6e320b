//! Core filter parser structure

use std::collections::VecDeque;

use crate::{
    ast::{BinaryOp, FilterExpression},
    error::{PathError, PathResult, parse_error},
    tokens::{Token, TokenKind, TokenMatcher},
};

/// Lowest binary operator precedence (`||`)
pub const MIN_PRECEDENCE: u8 = 1;

/// A parsed sub-expression with the height of its tree
pub(super) type Parsed = (FilterExpression, usize);

/// Parser for filter expressions
///
/// Both the nesting of recursive calls and the height of the built tree are
/// held to `max_depth`, so later passes over the tree stay shallow.
pub struct FilterParser<'a> {
    pub(super) tokens: &'a mut VecDeque<Token>,
    pub(super) end: usize,
    pub(super) max_depth: usize,
    pub(super) depth: usize,
}

impl<'a> FilterParser<'a> {
    /// Create a filter parser over the shared token queue
    #[inline]
    pub fn new(tokens: &'a mut VecDeque<Token>, end: usize, max_depth: usize) -> Self {
        Self {
            tokens,
            end,
            max_depth,
            depth: 0,
        }
    }

    /// Parse complete filter expression
    #[inline]
    pub fn parse_filter_expression(&mut self) -> PathResult<FilterExpression> {
        let (expression, height) = self.parse_expression(MIN_PRECEDENCE)?;
        tracing::trace!(
            target: "treepath::parser",
            complexity = expression.complexity_score(),
            height,
            "parsed filter expression"
        );
        Ok(expression)
    }

    /// Open one nesting level at `position`
    pub(super) fn enter_nesting(&mut self, position: usize) -> PathResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.too_deep(position));
        }
        Ok(())
    }

    #[inline]
    pub(super) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Reject a tree of `height` built at `position`
    pub(super) fn check_height(&self, height: usize, position: usize) -> PathResult<()> {
        if height > self.max_depth {
            return Err(self.too_deep(position));
        }
        Ok(())
    }

    fn too_deep(&self, position: usize) -> PathError {
        let found = self
            .tokens
            .front()
            .map_or_else(|| "end of input".to_string(), Token::describe);
        parse_error(
            format!("filter expression nested deeper than {}", self.max_depth),
            found,
            position,
        )
    }

    /// Position of the next token, or the end of input
    #[inline]
    pub(super) fn next_position(&self) -> usize {
        self.tokens.front().map_or(self.end, |token| token.position)
    }

    /// Binary operator at the front of the queue, if any
    ///
    /// A bare identifier in operator position names a custom operator.
    pub(super) fn peek_binary_operator(&self) -> Option<BinaryOp> {
        let kind = self.peek_kind()?;
        match kind {
            TokenKind::Identifier(name) => Some(BinaryOp::Custom(name.clone())),
            other => other.binary_operator(),
        }
    }

    #[inline]
    #[must_use]
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    #[inline]
    pub(super) fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.front().map(|token| &token.kind)
    }

    /// Consume the next token from the token stream
    #[inline]
    pub fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub(super) fn next_token(&mut self) -> PathResult<Token> {
        self.consume_token()
            .ok_or_else(|| parse_error("unexpected end of input", "end of input", self.end))
    }

    /// Expect a specific token kind and consume it
    pub fn expect_token(&mut self, expected: TokenKind) -> PathResult<Token> {
        let token = self.next_token()?;
        if TokenMatcher::tokens_match(&token.kind, &expected) {
            Ok(token)
        } else {
            Err(parse_error(
                format!("expected '{}' in filter expression", expected.as_debug_str()),
                token.describe(),
                token.position,
            ))
        }
    }
}
