//! Token definitions for path expression lexical analysis
//!
//! Defines the token kinds produced by the tokenizer and helpers the parsers
//! use for matching, operator precedence and diagnostics.

use crate::ast::BinaryOp;

/// Lexical category and payload of a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Structural tokens
    /// Root identifier token ($)
    Root,
    /// Dot notation token (.)
    Dot,
    /// Double dot (recursive descent) token (..)
    DoubleDot,
    /// Left bracket token ([)
    LeftBracket,
    /// Right bracket token (])
    RightBracket,
    /// Left parenthesis token (()
    LeftParen,
    /// Right parenthesis token ())
    RightParen,
    /// Comma separator token (,)
    Comma,
    /// Colon separator token (:)
    Colon,
    /// Question mark token (?)
    Question,
    /// Current item token (@)
    At,
    /// Wildcard token (*)
    Star,

    // Literals
    /// Quoted string literal with escapes resolved
    String(String),
    /// Signed integer literal
    Integer(i64),
    /// Signed decimal literal
    Number(f64),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // Operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    Not,
    /// `contains`
    Contains,
    /// `startsWith`
    StartsWith,
    /// `endsWith`
    EndsWith,
    /// `matches`
    Matches,

    /// Property name, function name or custom operator name
    Identifier(String),

    /// End of input, always the last token
    Eof,
}

/// A token with the character offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Describe the token for parse diagnostics
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::String(s) => format!("string \"{s}\""),
            TokenKind::Integer(n) => format!("integer {n}"),
            TokenKind::Number(n) => format!("number {n}"),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{}'", other.as_debug_str()),
        }
    }
}

impl TokenKind {
    /// Text of a word-like token usable as a property name after `.`
    ///
    /// Keywords and word operators are ordinary names in path position, so
    /// `$.matches.true` addresses two properties.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            TokenKind::Contains => Some("contains"),
            TokenKind::StartsWith => Some("startsWith"),
            TokenKind::EndsWith => Some("endsWith"),
            TokenKind::Matches => Some("matches"),
            _ => None,
        }
    }

    /// Built-in binary operator denoted by this token, if any
    #[must_use]
    pub fn binary_operator(&self) -> Option<BinaryOp> {
        Some(match self {
            TokenKind::Equal => BinaryOp::Equal,
            TokenKind::NotEqual => BinaryOp::NotEqual,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::LessEq => BinaryOp::LessEq,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::GreaterEq => BinaryOp::GreaterEq,
            TokenKind::LogicalAnd => BinaryOp::And,
            TokenKind::LogicalOr => BinaryOp::Or,
            TokenKind::Contains => BinaryOp::Contains,
            TokenKind::StartsWith => BinaryOp::StartsWith,
            TokenKind::EndsWith => BinaryOp::EndsWith,
            TokenKind::Matches => BinaryOp::Matches,
            _ => return None,
        })
    }

    /// Check if token is a literal value
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::String(_)
                | TokenKind::Integer(_)
                | TokenKind::Number(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Get string representation for debugging
    #[must_use]
    pub fn as_debug_str(&self) -> &'static str {
        match self {
            TokenKind::Root => "$",
            TokenKind::Dot => ".",
            TokenKind::DoubleDot => "..",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::At => "@",
            TokenKind::Star => "*",
            TokenKind::String(_) => "string",
            TokenKind::Integer(_) => "integer",
            TokenKind::Number(_) => "number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEq => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEq => ">=",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::Not => "!",
            TokenKind::Contains => "contains",
            TokenKind::StartsWith => "startsWith",
            TokenKind::EndsWith => "endsWith",
            TokenKind::Matches => "matches",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Eof => "EOF",
        }
    }
}

/// Utility functions for token matching and comparison
pub struct TokenMatcher;

impl TokenMatcher {
    /// Check if two token kinds match, ignoring payloads
    #[inline]
    #[must_use]
    pub fn tokens_match(actual: &TokenKind, expected: &TokenKind) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }

    /// Check if a character may start an identifier
    #[inline]
    #[must_use]
    pub fn is_identifier_start(c: char) -> bool {
        c.is_alphabetic() || c == '_' || c == '$'
    }

    /// Check if a character may continue an identifier
    #[inline]
    #[must_use]
    pub fn is_identifier_continue(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Check if a word lexes as a keyword or word operator instead of an identifier
    #[must_use]
    pub fn is_keyword(name: &str) -> bool {
        matches!(
            name,
            "true" | "false" | "null" | "contains" | "startsWith" | "endsWith" | "matches"
        )
    }

    /// Check if a whole name would lex back as a single word token
    #[must_use]
    pub fn is_plain_identifier(name: &str) -> bool {
        // a lone `$` lexes as the root sigil
        if name == "$" {
            return false;
        }
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if Self::is_identifier_start(first) => {
                chars.all(Self::is_identifier_continue)
            }
            _ => false,
        }
    }
}
