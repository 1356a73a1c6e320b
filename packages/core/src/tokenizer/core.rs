//! Core tokenizer type and dispatch loop

use std::collections::VecDeque;

use crate::{
    error::PathResult,
    tokens::{Token, TokenKind},
};

/// Converts a path string into an ordered token queue ending in `Eof`
pub struct PathTokenizer {
    pub(super) tokens: VecDeque<Token>,
}

impl PathTokenizer {
    /// Tokenize `input`, failing on the first character no token can start with
    pub fn tokenize(input: &str) -> PathResult<VecDeque<Token>> {
        use super::{characters, numbers, operators, strings};

        let chars: Vec<char> = input.chars().collect();
        let mut lexer = Self {
            tokens: VecDeque::with_capacity(chars.len() / 2 + 1),
        };
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {}
                '\'' | '"' => {
                    i = strings::parse_string_literal(&mut lexer, &chars, i)?;
                }
                c if c.is_ascii_digit() || c == '-' => {
                    i = numbers::parse_number_literal(&mut lexer, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '&' | '|' => {
                    i = operators::parse_operator(&mut lexer, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(&mut lexer, &chars, i)?;
                }
            }
            i += 1;
        }

        lexer.push(TokenKind::Eof, chars.len());
        tracing::trace!(
            target: "treepath::parser",
            tokens = lexer.tokens.len(),
            "tokenized path expression"
        );
        Ok(lexer.tokens)
    }

    #[inline]
    pub(super) fn push(&mut self, kind: TokenKind, position: usize) {
        self.tokens.push_back(Token::new(kind, position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        PathTokenizer::tokenize(input)
            .expect("Failed to tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_simple_path() {
        assert_eq!(
            kinds("$.users[0].name"),
            vec![
                TokenKind::Root,
                TokenKind::Dot,
                TokenKind::Identifier("users".into()),
                TokenKind::LeftBracket,
                TokenKind::Integer(0),
                TokenKind::RightBracket,
                TokenKind::Dot,
                TokenKind::Identifier("name".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_filter_expression() {
        assert_eq!(
            kinds("[?(@.age >= 18 && @.name startsWith 'A')]"),
            vec![
                TokenKind::LeftBracket,
                TokenKind::Question,
                TokenKind::LeftParen,
                TokenKind::At,
                TokenKind::Dot,
                TokenKind::Identifier("age".into()),
                TokenKind::GreaterEq,
                TokenKind::Integer(18),
                TokenKind::LogicalAnd,
                TokenKind::At,
                TokenKind::Dot,
                TokenKind::Identifier("name".into()),
                TokenKind::StartsWith,
                TokenKind::String("A".into()),
                TokenKind::RightParen,
                TokenKind::RightBracket,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_dollar_prefixed_identifier() {
        assert_eq!(
            kinds("$.$ref"),
            vec![
                TokenKind::Root,
                TokenKind::Dot,
                TokenKind::Identifier("$ref".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions_are_character_offsets() {
        let tokens = PathTokenizer::tokenize("é.ab").expect("Failed to tokenize");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_unknown_character_is_lex_error() {
        let error = PathTokenizer::tokenize("$.a#b").expect_err("Expected lex error");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.position(), Some(3));
        assert!(matches!(error, crate::error::PathError::Lex { character: '#', .. }));
    }

    #[test]
    fn test_empty_input_yields_eof_only() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   "), vec![TokenKind::Eof]);
    }
}
