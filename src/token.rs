//! Token types produced by the lexer.

use std::fmt;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Position { line, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[a.b.c]` table header; text is the dotted path
    KeyGroup,
    /// Bare key on the left of `=`
    Key,
    /// `"..."`; text is the payload with escape markers kept
    String,
    /// Integer, float or timestamp literal
    Numeric,
    /// `true`
    True,
    /// `false`
    False,
    /// `[` opening an array
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `=`
    Assignment,
}

impl TokenKind {
    /// Whether a token of this kind can begin a value.
    #[must_use]
    pub const fn starts_value(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Numeric
                | TokenKind::True
                | TokenKind::False
                | TokenKind::LeftBracket
        )
    }
}

/// A token with its raw text and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
        }
    }
}
