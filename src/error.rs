//! Error types for parsing configuration text.
//!
//! Every error raised while reading a document carries the 1-based line and
//! column where it was detected. Parsing stops at the first error; there is
//! no recovery and no partial result.
//!
//! ## Error Categories
//!
//! - **Lexical Errors** ([`Error::Lex`]): malformed characters, strings,
//!   escapes or table headers
//! - **Structural Errors** ([`Error::Syntax`], [`Error::InvalidNumber`],
//!   [`Error::DepthLimit`]): well-formed tokens in an illegal arrangement
//! - **Conversion Errors** ([`Error::TypeMismatch`]): strict extraction of a
//!   [`Value`](crate::Value) into a Rust type
//! - **I/O Errors** ([`Error::Io`]): reading the input failed
//!
//! ## Examples
//!
//! ```rust
//! use toto::from_str;
//!
//! let err = from_str("b = 1\n[b]\n").unwrap_err();
//! assert!(err.is_structural());
//! assert_eq!(err.line(), Some(2));
//! ```

use crate::token::Position;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while loading a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading the input
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed input at the character level
    #[error("Lexical error at line {line}, column {col}: {msg}")]
    Lex { line: usize, col: usize, msg: String },

    /// Tokens that do not form a legal document
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Numeric literal that is neither an integer, a float nor a timestamp
    #[error("Invalid number at line {line}, column {col}: {literal:?} is not an integer, float or UTC timestamp")]
    InvalidNumber {
        line: usize,
        col: usize,
        literal: String,
    },

    /// Arrays nested deeper than the configured limit
    #[error("Array nesting exceeds {limit} levels at line {line}, column {col}")]
    DepthLimit {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// Strict conversion of a value into an incompatible type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl Error {
    /// Creates a lexical error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::{Error, Position};
    ///
    /// let err = Error::lex(Position::new(3, 7), "unexpected token");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn lex(pos: Position, msg: &str) -> Self {
        Error::Lex {
            line: pos.line,
            col: pos.col,
            msg: msg.to_string(),
        }
    }

    /// Creates a structural error at the given position.
    pub fn syntax(pos: Position, msg: &str) -> Self {
        Error::Syntax {
            line: pos.line,
            col: pos.col,
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a numeric literal that could not be classified.
    pub fn invalid_number(pos: Position, literal: &str) -> Self {
        Error::InvalidNumber {
            line: pos.line,
            col: pos.col,
            literal: literal.to_string(),
        }
    }

    /// Creates an error for arrays nested beyond `limit`.
    pub fn depth_limit(pos: Position, limit: usize) -> Self {
        Error::DepthLimit {
            line: pos.line,
            col: pos.col,
            limit,
        }
    }

    /// Creates a type mismatch error for strict value conversions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an I/O error.
    pub fn io<T: fmt::Display>(err: T) -> Self {
        Error::Io(err.to_string())
    }

    /// Returns the source position the error was detected at, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex { line, col, .. }
            | Error::Syntax { line, col, .. }
            | Error::InvalidNumber { line, col, .. }
            | Error::DepthLimit { line, col, .. } => Some(Position::new(*line, *col)),
            Error::Io(_) | Error::TypeMismatch { .. } => None,
        }
    }

    /// Returns the 1-based source line the error was detected at, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.position().map(|pos| pos.line)
    }

    /// Returns `true` for character-level errors.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    /// Returns `true` for errors in the arrangement of otherwise valid tokens.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. } | Error::InvalidNumber { .. } | Error::DepthLimit { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
