//! Precedence climbing and primary expression parsing

use super::core::{FilterParser, Parsed};
use crate::{
    ast::{FilterExpression, Literal, UnaryOp},
    error::{PathResult, parse_error},
    tokens::TokenKind,
};

impl FilterParser<'_> {
    /// Parse a binary expression whose operators bind at least `min_precedence`
    ///
    /// The right operand is parsed one tier tighter, making equal-precedence
    /// chains left associative.
    pub(super) fn parse_expression(&mut self, min_precedence: u8) -> PathResult<Parsed> {
        let (mut left, mut height) = self.parse_unary()?;

        while let Some(operator) = self.peek_binary_operator() {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            let position = self.next_position();
            self.consume_token();
            self.enter_nesting(position)?;
            let (right, right_height) = self.parse_expression(precedence + 1)?;
            self.exit_nesting();

            height = height.max(right_height) + 1;
            self.check_height(height, position)?;
            left = FilterExpression::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok((left, height))
    }

    /// Parse `!` prefixes, then a primary
    fn parse_unary(&mut self) -> PathResult<Parsed> {
        if matches!(self.peek_kind(), Some(TokenKind::Not)) {
            let position = self.next_position();
            self.consume_token();
            self.enter_nesting(position)?;
            let (operand, height) = self.parse_unary()?;
            self.exit_nesting();
            self.check_height(height + 1, position)?;
            return Ok((
                FilterExpression::Unary {
                    operator: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                height + 1,
            ));
        }
        self.parse_primary()
    }

    /// Parse primary expressions (property refs, literals, parentheses, calls)
    fn parse_primary(&mut self) -> PathResult<Parsed> {
        let token = self.next_token()?;
        let literal = match token.kind {
            TokenKind::At => return Ok((self.parse_property_path()?, 1)),
            TokenKind::LeftParen => {
                self.enter_nesting(token.position)?;
                let parsed = self.parse_expression(super::core::MIN_PRECEDENCE)?;
                self.exit_nesting();
                self.expect_token(TokenKind::RightParen)?;
                return Ok(parsed);
            }
            TokenKind::Identifier(name) => {
                if matches!(self.peek_kind(), Some(TokenKind::LeftParen)) {
                    self.consume_token();
                    self.enter_nesting(token.position)?;
                    let (args, height) = self.parse_function_arguments()?;
                    self.exit_nesting();
                    self.check_height(height + 1, token.position)?;
                    return Ok((FilterExpression::Call { name, args }, height + 1));
                }
                return Err(parse_error(
                    "bare names are not values, use '@.name' or call 'name(...)'",
                    format!("identifier '{name}'"),
                    token.position,
                ));
            }
            TokenKind::String(value) => Literal::String(value),
            TokenKind::Integer(value) => Literal::Integer(value),
            TokenKind::Number(value) => Literal::Float(value),
            TokenKind::True => Literal::Boolean(true),
            TokenKind::False => Literal::Boolean(false),
            TokenKind::Null => Literal::Null,
            TokenKind::Root => {
                return Err(parse_error(
                    "'$' cannot be referenced inside a filter, use '@'",
                    "'$'",
                    token.position,
                ));
            }
            _ => {
                return Err(parse_error(
                    "expected '@', literal, '(' or function call",
                    token.describe(),
                    token.position,
                ));
            }
        };
        Ok((FilterExpression::Literal(literal), 1))
    }
}
