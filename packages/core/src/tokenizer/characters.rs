//! Punctuation, identifier and keyword tokenization

use super::core::PathTokenizer;
use crate::{
    error::{PathResult, lex_error},
    tokens::{TokenKind, TokenMatcher},
};

/// Parse single-character tokens, `..`, identifiers and keywords
pub(super) fn parse_character_token(
    lexer: &mut PathTokenizer,
    chars: &[char],
    i: usize,
) -> PathResult<usize> {
    let kind = match chars[i] {
        '$' => {
            // `$name` is an identifier, a bare `$` is the root sigil
            if chars
                .get(i + 1)
                .is_some_and(|&c| TokenMatcher::is_identifier_continue(c))
            {
                return parse_identifier(lexer, chars, i);
            }
            TokenKind::Root
        }
        '.' => {
            if chars.get(i + 1) == Some(&'.') {
                if chars.get(i + 2) == Some(&'.') {
                    return Err(lex_error(
                        "'...' is not an operator, use '..' for recursive descent",
                        '.',
                        i + 2,
                    ));
                }
                lexer.push(TokenKind::DoubleDot, i);
                return Ok(i + 1);
            }
            TokenKind::Dot
        }
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '?' => TokenKind::Question,
        '@' => TokenKind::At,
        '*' => TokenKind::Star,
        c if TokenMatcher::is_identifier_start(c) => return parse_identifier(lexer, chars, i),
        c => return Err(lex_error("no token starts with this character", c, i)),
    };
    lexer.push(kind, i);
    Ok(i)
}

/// Parse identifier, keyword or word operator
fn parse_identifier(lexer: &mut PathTokenizer, chars: &[char], start: usize) -> PathResult<usize> {
    let mut end = start + 1;
    while end < chars.len() && TokenMatcher::is_identifier_continue(chars[end]) {
        end += 1;
    }
    let word: String = chars[start..end].iter().collect();

    let kind = match word.as_str() {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "contains" => TokenKind::Contains,
        "startsWith" => TokenKind::StartsWith,
        "endsWith" => TokenKind::EndsWith,
        "matches" => TokenKind::Matches,
        _ => TokenKind::Identifier(word),
    };

    lexer.push(kind, start);
    Ok(end - 1)
}
