//! Error constructor functions
//!
//! Factory helpers used throughout the pipeline so call sites stay one line.

use super::types::PathError;

/// Creates a lexing error for an offending character
pub fn lex_error(reason: impl Into<String>, character: char, position: usize) -> PathError {
    PathError::Lex {
        message: reason.into(),
        character,
        position,
    }
}

/// Creates a parse error naming the offending token
///
/// # Examples
/// ```
/// use treepath_core::error::parse_error;
///
/// let error = parse_error("empty brackets are not allowed", "']'", 5);
/// assert_eq!(error.position(), Some(5));
/// ```
pub fn parse_error(
    reason: impl Into<String>,
    token: impl Into<String>,
    position: usize,
) -> PathError {
    PathError::Parse {
        message: reason.into(),
        token: token.into(),
        position,
    }
}

/// Creates a validation error, optionally anchored at a segment position
pub fn validation_error(reason: impl Into<String>, position: Option<usize>) -> PathError {
    PathError::Validation {
        message: reason.into(),
        position,
    }
}

/// Creates a security error; the caller aborts the whole query
pub fn security_error(reason: impl Into<String>) -> PathError {
    PathError::Security {
        message: reason.into(),
    }
}

/// Creates a defensive evaluation error
pub fn evaluation_error(reason: impl Into<String>) -> PathError {
    PathError::Evaluation {
        message: reason.into(),
    }
}
