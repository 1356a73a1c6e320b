//! Signed integer and decimal literal tokenization

use super::core::PathTokenizer;
use crate::{
    error::{PathResult, lex_error},
    tokens::TokenKind,
};

/// Parse a number literal: `-? DIGITS ('.' DIGITS)? ([eE] [+-]? DIGITS)?`
pub(super) fn parse_number_literal(
    lexer: &mut PathTokenizer,
    chars: &[char],
    start: usize,
) -> PathResult<usize> {
    let mut i = start;
    if chars[i] == '-' {
        i += 1;
        if !chars.get(i).is_some_and(char::is_ascii_digit) {
            return Err(lex_error("'-' must be followed by a digit", '-', start));
        }
    }

    i = skip_digits(chars, i);

    let mut is_float = false;
    // `1.5` is a decimal; `1.` followed by a non-digit stays an integer then `.`
    if chars.get(i) == Some(&'.') && chars.get(i + 1).is_some_and(char::is_ascii_digit) {
        is_float = true;
        i = skip_digits(chars, i + 1);
    }

    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        if !chars.get(j).is_some_and(char::is_ascii_digit) {
            return Err(lex_error("exponent requires digits", chars[i], i));
        }
        is_float = true;
        i = skip_digits(chars, j);
    }

    let text: String = chars[start..i].iter().collect();
    let kind = if is_float {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::Number(value),
            _ => return Err(lex_error("decimal literal out of range", chars[start], start)),
        }
    } else {
        match text.parse::<i64>() {
            Ok(value) => TokenKind::Integer(value),
            Err(_) => return Err(lex_error("integer literal overflows", chars[start], start)),
        }
    };

    lexer.push(kind, start);
    Ok(i - 1)
}

fn skip_digits(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use crate::{error::ErrorKind, tokenizer::PathTokenizer, tokens::TokenKind};

    fn first(input: &str) -> TokenKind {
        PathTokenizer::tokenize(input)
            .expect("Failed to tokenize")
            .pop_front()
            .expect("Failed to get token")
            .kind
    }

    #[test]
    fn test_integer_and_decimal_literals() {
        assert_eq!(first("42"), TokenKind::Integer(42));
        assert_eq!(first("-7"), TokenKind::Integer(-7));
        assert_eq!(first("2.5"), TokenKind::Number(2.5));
        assert_eq!(first("-0.25"), TokenKind::Number(-0.25));
        assert_eq!(first("1e3"), TokenKind::Number(1000.0));
    }

    #[test]
    fn test_integer_overflow_is_lex_error() {
        let error = PathTokenizer::tokenize("[99999999999999999999]").expect_err("Expected overflow");
        assert_eq!(error.kind(), ErrorKind::Lex);
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_lone_minus_is_lex_error() {
        let error = PathTokenizer::tokenize("[-]").expect_err("Expected lex error");
        assert_eq!(error.position(), Some(1));
    }
}
