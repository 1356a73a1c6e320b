//! Comparison and logical operator tokenization

use super::core::PathTokenizer;
use crate::{
    error::{PathResult, lex_error},
    tokens::TokenKind,
};

/// Parse `== != < <= > >= && || !`
pub(super) fn parse_operator(
    lexer: &mut PathTokenizer,
    chars: &[char],
    i: usize,
) -> PathResult<usize> {
    let next = chars.get(i + 1).copied();
    let (kind, width) = match (chars[i], next) {
        ('=', Some('=')) => (TokenKind::Equal, 2),
        ('!', Some('=')) => (TokenKind::NotEqual, 2),
        ('!', _) => (TokenKind::Not, 1),
        ('<', Some('=')) => (TokenKind::LessEq, 2),
        ('<', _) => (TokenKind::Less, 1),
        ('>', Some('=')) => (TokenKind::GreaterEq, 2),
        ('>', _) => (TokenKind::Greater, 1),
        ('&', Some('&')) => (TokenKind::LogicalAnd, 2),
        ('|', Some('|')) => (TokenKind::LogicalOr, 2),
        ('=', _) => return Err(lex_error("single '=' is not an operator, use '=='", '=', i)),
        ('&', _) => return Err(lex_error("single '&' is not an operator, use '&&'", '&', i)),
        ('|', _) => return Err(lex_error("single '|' is not an operator, use '||'", '|', i)),
        (c, _) => return Err(lex_error("unexpected operator character", c, i)),
    };
    lexer.push(kind, i);
    Ok(i + width - 1)
}

#[cfg(test)]
mod tests {
    use crate::{error::PathError, tokenizer::PathTokenizer, tokens::TokenKind};

    #[test]
    fn test_not_versus_not_equal() {
        let kinds: Vec<TokenKind> = PathTokenizer::tokenize("!a != b")
            .expect("Failed to tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(kinds[0], TokenKind::Not);
        assert_eq!(kinds[2], TokenKind::NotEqual);
    }

    #[test]
    fn test_single_character_operators_are_rejected() {
        for (input, bad, position) in [("a = b", '=', 2), ("a & b", '&', 2), ("a|b", '|', 1)] {
            match PathTokenizer::tokenize(input) {
                Err(PathError::Lex {
                    character,
                    position: at,
                    ..
                }) => {
                    assert_eq!(character, bad);
                    assert_eq!(at, position);
                }
                other => panic!("Expected lex error for {input}, got {other:?}"),
            }
        }
    }
}
