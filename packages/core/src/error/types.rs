//! Path Error Types
//!
//! Core error types for path tokenizing, parsing, validation and evaluation.

/// Category of a [`PathError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed characters in the query text
    Lex,
    /// Token sequence does not match the path grammar
    Parse,
    /// Parseable but semantically invalid AST
    Validation,
    /// Abuse pattern detected inside a filter expression
    Security,
    /// Evaluator reached a state validation should have ruled out
    Evaluation,
}

impl ErrorKind {
    /// Short lowercase label used in log fields
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Lex => "lex",
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Security => "security",
            ErrorKind::Evaluation => "evaluation",
        }
    }
}

/// Main path query error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("unexpected character '{character}' at position {position}: {message}")]
    Lex {
        message: String,
        character: char,
        position: usize,
    },

    #[error("unexpected {token} at position {position}: {message}")]
    Parse {
        message: String,
        token: String,
        position: usize,
    },

    #[error("invalid path{}: {message}", position_suffix(.position))]
    Validation {
        message: String,
        position: Option<usize>,
    },

    #[error("security violation: {message}")]
    Security { message: String },

    #[error("evaluation failed: {message}")]
    Evaluation { message: String },
}

fn position_suffix(position: &Option<usize>) -> String {
    position.map(|p| format!(" at position {p}")).unwrap_or_default()
}

/// Result type for path query operations
pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    /// Error category
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::Lex { .. } => ErrorKind::Lex,
            PathError::Parse { .. } => ErrorKind::Parse,
            PathError::Validation { .. } => ErrorKind::Validation,
            PathError::Security { .. } => ErrorKind::Security,
            PathError::Evaluation { .. } => ErrorKind::Evaluation,
        }
    }

    /// Source position carried by the error, if any
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            PathError::Lex { position, .. } | PathError::Parse { position, .. } => Some(*position),
            PathError::Validation { position, .. } => *position,
            PathError::Security { .. } | PathError::Evaluation { .. } => None,
        }
    }

    /// Human readable reason without the category prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            PathError::Lex { message, .. }
            | PathError::Parse { message, .. }
            | PathError::Validation { message, .. }
            | PathError::Security { message }
            | PathError::Evaluation { message } => message,
        }
    }

    #[must_use]
    pub fn is_security(&self) -> bool {
        self.kind() == ErrorKind::Security
    }
}
