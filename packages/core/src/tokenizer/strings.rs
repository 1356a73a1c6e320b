//! Quoted string literal tokenization
//!
//! Single- and double-quoted strings with JSON-style escapes, including
//! `\uXXXX` escapes combined into UTF-16 surrogate pairs.

use super::core::PathTokenizer;
use crate::{
    error::{PathResult, lex_error},
    tokens::TokenKind,
};

/// Parse a quoted string, returning the index of the closing quote
pub(super) fn parse_string_literal(
    lexer: &mut PathTokenizer,
    chars: &[char],
    start: usize,
) -> PathResult<usize> {
    let quote = chars[start];
    let mut value = String::new();
    let mut i = start + 1;

    loop {
        let Some(&c) = chars.get(i) else {
            return Err(lex_error("unterminated string literal", quote, start));
        };
        if c == quote {
            break;
        }
        if c != '\\' {
            value.push(c);
            i += 1;
            continue;
        }

        let Some(&escape) = chars.get(i + 1) else {
            return Err(lex_error("unterminated string literal", quote, start));
        };
        match escape {
            '"' | '\'' | '\\' | '/' => value.push(escape),
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'u' => {
                let (decoded, last) = parse_unicode_escape(chars, i)?;
                value.push(decoded);
                i = last + 1;
                continue;
            }
            other => return Err(lex_error("invalid escape sequence", other, i + 1)),
        }
        i += 2;
    }

    lexer.push(TokenKind::String(value), start);
    Ok(i)
}

/// Decode `\uXXXX` (and a following low surrogate) starting at the backslash
///
/// Returns the decoded char and the index of the last hex digit consumed.
fn parse_unicode_escape(chars: &[char], backslash: usize) -> PathResult<(char, usize)> {
    let high = read_hex4(chars, backslash + 2)?;

    if (0xDC00..=0xDFFF).contains(&high) {
        return Err(lex_error(
            "low surrogate without preceding high surrogate",
            'u',
            backslash + 1,
        ));
    }

    if !(0xD800..=0xDBFF).contains(&high) {
        let decoded = char::from_u32(high)
            .ok_or_else(|| lex_error("invalid unicode code point", 'u', backslash + 1))?;
        return Ok((decoded, backslash + 5));
    }

    let pair = backslash + 6;
    if chars.get(pair) != Some(&'\\') || chars.get(pair + 1) != Some(&'u') {
        return Err(lex_error(
            "high surrogate not followed by a low surrogate escape",
            'u',
            backslash + 1,
        ));
    }
    let low = read_hex4(chars, pair + 2)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(lex_error(
            "high surrogate not followed by a valid low surrogate",
            'u',
            pair + 1,
        ));
    }

    let scalar = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    let decoded = char::from_u32(scalar)
        .ok_or_else(|| lex_error("invalid surrogate pair", 'u', backslash + 1))?;
    Ok((decoded, pair + 5))
}

fn read_hex4(chars: &[char], at: usize) -> PathResult<u32> {
    let mut code = 0u32;
    for offset in 0..4 {
        let position = at + offset;
        let Some(&c) = chars.get(position) else {
            return Err(lex_error("incomplete unicode escape", 'u', at.saturating_sub(1)));
        };
        let digit = c
            .to_digit(16)
            .ok_or_else(|| lex_error("invalid hex digit in unicode escape", c, position))?;
        code = code * 16 + digit;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use crate::{error::ErrorKind, tokenizer::PathTokenizer, tokens::TokenKind};

    fn string_token(input: &str) -> String {
        match PathTokenizer::tokenize(input)
            .expect("Failed to tokenize")
            .pop_front()
            .map(|t| t.kind)
        {
            Some(TokenKind::String(s)) => s,
            other => panic!("Expected string token, got {other:?}"),
        }
    }

    #[test]
    fn test_quote_styles_and_escapes() {
        assert_eq!(string_token("'it\\'s'"), "it's");
        assert_eq!(string_token("\"a\\\"b\""), "a\"b");
        assert_eq!(string_token("'tab\\there'"), "tab\there");
        assert_eq!(string_token("'\\u00e9'"), "é");
    }

    #[test]
    fn test_surrogate_pair_escape() {
        assert_eq!(string_token("'\\ud83d\\ude00'"), "\u{1F600}");
    }

    #[test]
    fn test_lone_low_surrogate_is_rejected() {
        let error = PathTokenizer::tokenize("'\\udc00'").expect_err("Expected lex error");
        assert_eq!(error.kind(), ErrorKind::Lex);
    }

    #[test]
    fn test_unterminated_string_reports_opening_quote() {
        let error = PathTokenizer::tokenize("$['abc").expect_err("Expected lex error");
        assert_eq!(error.position(), Some(2));
    }

    #[test]
    fn test_bad_escape_reports_escape_character() {
        let error = PathTokenizer::tokenize("'a\\qb'").expect_err("Expected lex error");
        assert_eq!(error.position(), Some(3));
    }
}
