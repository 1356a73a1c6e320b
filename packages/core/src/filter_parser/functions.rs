//! Function call argument parsing

use super::core::{FilterParser, MIN_PRECEDENCE};
use crate::{ast::FilterExpression, error::PathResult, tokens::TokenKind};

impl FilterParser<'_> {
    /// Parse comma-separated arguments after `(`, through the closing `)`
    ///
    /// Also returns the greatest argument height, 0 for an empty list.
    pub(super) fn parse_function_arguments(
        &mut self,
    ) -> PathResult<(Vec<FilterExpression>, usize)> {
        let mut args = Vec::new();
        let mut height = 0;

        if matches!(self.peek_kind(), Some(TokenKind::RightParen)) {
            self.consume_token();
            return Ok((args, height));
        }

        loop {
            let (arg, arg_height) = self.parse_expression(MIN_PRECEDENCE)?;
            args.push(arg);
            height = height.max(arg_height);
            if !matches!(self.peek_kind(), Some(TokenKind::Comma)) {
                break;
            }
            self.consume_token();
        }

        self.expect_token(TokenKind::RightParen)?;
        Ok((args, height))
    }
}
