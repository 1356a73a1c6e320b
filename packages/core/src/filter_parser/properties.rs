//! `@`-rooted property path parsing

use super::core::FilterParser;
use crate::{
    ast::FilterExpression,
    error::{PathResult, parse_error},
    tokens::TokenKind,
};

impl FilterParser<'_> {
    /// Parse the member chain after `@`: `.name` or `["name"]`, repeated
    pub(super) fn parse_property_path(&mut self) -> PathResult<FilterExpression> {
        let mut path = Vec::new();

        loop {
            match self.peek_kind() {
                Some(TokenKind::Dot) => {
                    self.consume_token();
                    let token = self.next_token()?;
                    match token.kind.word() {
                        Some(name) => path.push(name.to_string()),
                        None => {
                            return Err(parse_error(
                                "expected property name after '.'",
                                token.describe(),
                                token.position,
                            ));
                        }
                    }
                }
                Some(TokenKind::LeftBracket) => {
                    self.consume_token();
                    let token = self.next_token()?;
                    match token.kind {
                        TokenKind::String(name) => path.push(name),
                        _ => {
                            return Err(parse_error(
                                "expected quoted property name inside '@[...]'",
                                token.describe(),
                                token.position,
                            ));
                        }
                    }
                    self.expect_token(TokenKind::RightBracket)?;
                }
                _ => break,
            }
        }

        Ok(FilterExpression::PropertyRef(path))
    }
}
