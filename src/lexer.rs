//! Tokenizer for configuration text.
//!
//! The [`Lexer`] is pull-based: each call to [`Lexer::next_token`] reads just
//! enough characters to produce one [`Token`]. Whitespace, newlines and `#`
//! comments are skipped between tokens.
//!
//! ## Lexer Modes
//!
//! The same character means different things depending on where it appears:
//!
//! ```text
//! [server]          <- `[` in key position opens a table header
//! enabled = true    <- `enabled` is a key, `true` is a boolean literal
//! ports = [80, 443] <- `[` in value position opens an array
//! ```
//!
//! The parser tells the lexer which position it is in through
//! [`Lexer::set_mode`]. The lexer never infers it from previous tokens.

use crate::error::{Error, Result};
use crate::token::{Position, Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;
use tracing::trace;

/// Grammatical position the next token is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Start of a line: letters form keys, `[` opens a table header.
    #[default]
    Key,
    /// Right side of `=`: letters form booleans, `[` opens an array.
    Value,
}

/// Single-pass, character-at-a-time tokenizer.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
            col: 1,
            mode: LexMode::Key,
        }
    }

    /// Position of the next unread character.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    #[must_use]
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LexMode) {
        self.mode = mode;
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Reads the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] on malformed input, positioned at the offending
    /// character.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let pos = self.position();
            let Some(ch) = self.next_char() else {
                return Ok(None);
            };

            let token = match ch {
                ' ' | '\t' | '\r' | '\n' => continue,
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '[' if self.mode == LexMode::Value => Token::new(TokenKind::LeftBracket, "[", pos),
                '[' => Token::new(TokenKind::KeyGroup, self.key_group()?, pos),
                ']' => Token::new(TokenKind::RightBracket, "]", pos),
                ',' => Token::new(TokenKind::Comma, ",", pos),
                '=' => Token::new(TokenKind::Assignment, "=", pos),
                '"' => Token::new(TokenKind::String, self.string_value()?, pos),
                c if c.is_alphabetic() => match self.mode {
                    LexMode::Value => self.bool_value(c, pos)?,
                    LexMode::Key => Token::new(TokenKind::Key, self.key_value(c)?, pos),
                },
                c if c.is_ascii_digit() => Token::new(TokenKind::Numeric, self.numeric_value(c), pos),
                c => return Err(Error::lex(pos, &format!("unexpected token {:?}", c))),
            };

            trace!("Token {:?} at {}: {:?}", token.kind, token.pos, token.text);
            return Ok(Some(token));
        }
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.next_char() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Reads `a.b_1.c]`, the opening `[` already consumed.
    fn key_group(&mut self) -> Result<String> {
        let mut path = String::new();
        let mut segment_start = true;

        loop {
            let pos = self.position();
            match self.next_char() {
                Some(c) if segment_start => {
                    if !c.is_alphabetic() {
                        return Err(Error::lex(pos, "invalid keygroup"));
                    }
                    path.push(c);
                    segment_start = false;
                }
                Some(c) if c.is_alphanumeric() || c == '_' => path.push(c),
                Some('.') => {
                    path.push('.');
                    segment_start = true;
                }
                Some(']') => break,
                _ => return Err(Error::lex(pos, "invalid keygroup")),
            }
        }

        self.omit_line_remainder()?;
        Ok(path)
    }

    /// Only spaces and tabs may follow a table header on its line.
    fn omit_line_remainder(&mut self) -> Result<()> {
        loop {
            let pos = self.position();
            match self.next_char() {
                None | Some('\n') => return Ok(()),
                Some(' ' | '\t' | '\r') => {}
                Some(_) => return Err(Error::lex(pos, "unexpected character at end of line")),
            }
        }
    }

    /// Reads a quoted string body, the opening quote already consumed.
    ///
    /// Escapes are validated but kept verbatim in the payload.
    fn string_value(&mut self) -> Result<String> {
        let mut buf = String::new();
        let mut escaped = false;

        loop {
            let pos = self.position();
            match self.next_char() {
                None | Some('\n') => return Err(Error::lex(pos, "unexpected end of line")),
                Some(c) if escaped => {
                    if !matches!(c, 'b' | 't' | 'n' | 'f' | 'r' | '"' | '/' | '\\' | 'u') {
                        return Err(Error::lex(pos, "unknown escape sequence"));
                    }
                    escaped = false;
                    buf.push(c);
                }
                Some('"') => return Ok(buf),
                Some(c) => {
                    escaped = c == '\\';
                    buf.push(c);
                }
            }
        }
    }

    fn bool_value(&mut self, first: char, pos: Position) -> Result<Token> {
        let mut word = String::from(first);
        while let Some(c) = self.peek_char().filter(|c| c.is_alphabetic()) {
            word.push(c);
            self.next_char();
        }

        match word.as_str() {
            "true" => Ok(Token::new(TokenKind::True, word, pos)),
            "false" => Ok(Token::new(TokenKind::False, word, pos)),
            _ => Err(Error::lex(pos, "unknown value type")),
        }
    }

    fn key_value(&mut self, first: char) -> Result<String> {
        let mut key = String::from(first);
        while let Some(c) = self
            .peek_char()
            .filter(|c| c.is_alphanumeric() || *c == '_')
        {
            key.push(c);
            self.next_char();
        }

        match self.peek_char() {
            None | Some(' ' | '\t' | '\r' | '\n' | '=') => Ok(key),
            Some(_) => Err(Error::lex(self.position(), "invalid key")),
        }
    }

    /// Reads a numeric literal up to whitespace, `,` or `]`.
    ///
    /// The delimiter is left unread so the next call sees it as a token.
    fn numeric_value(&mut self, first: char) -> String {
        let mut literal = String::from(first);
        while let Some(c) = self
            .peek_char()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != ']')
        {
            literal.push(c);
            self.next_char();
        }
        literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_token(src: &str, mode: LexMode) -> Token {
        let mut lexer = Lexer::new(src);
        lexer.set_mode(mode);
        lexer.next_token().unwrap().expect("expected a token")
    }

    fn kinds(src: &str, mode: LexMode) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(src);
        lexer.set_mode(mode);
        let mut out = Vec::new();
        while let Some(token) = lexer.next_token().unwrap() {
            out.push(token.kind);
        }
        out
    }

    #[test]
    fn test_read_key_group() {
        let token = first_token("[key.subkey]", LexMode::Key);
        assert_eq!(token.kind, TokenKind::KeyGroup);
        assert_eq!(token.text, "key.subkey");
    }

    #[test]
    fn test_read_key() {
        let token = first_token("key = ", LexMode::Key);
        assert_eq!(token.kind, TokenKind::Key);
        assert_eq!(token.text, "key");

        let token = first_token("connection_max2=5", LexMode::Key);
        assert_eq!(token.text, "connection_max2");
    }

    #[test]
    fn test_read_string_keeps_escapes() {
        let src = r#""I'm a string. \"You can quote me\". Name\tJosé\nLocation\tSF.""#;
        let token = first_token(src, LexMode::Value);
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(
            token.text,
            r#"I'm a string. \"You can quote me\". Name\tJosé\nLocation\tSF."#
        );
    }

    #[test]
    fn test_read_numeric() {
        let token = first_token("42 ", LexMode::Value);
        assert_eq!(token.kind, TokenKind::Numeric);
        assert_eq!(token.text, "42");

        let token = first_token("42.5 \n", LexMode::Value);
        assert_eq!(token.text, "42.5");

        let token = first_token("1979-05-27T07:32:00Z", LexMode::Value);
        assert_eq!(token.text, "1979-05-27T07:32:00Z");
    }

    #[test]
    fn test_numeric_leaves_delimiters() {
        assert_eq!(
            kinds("[1,2]", LexMode::Value),
            vec![
                TokenKind::LeftBracket,
                TokenKind::Numeric,
                TokenKind::Comma,
                TokenKind::Numeric,
                TokenKind::RightBracket,
            ]
        );
    }

    #[test]
    fn test_mode_selects_bracket_meaning() {
        assert_eq!(first_token("[a]", LexMode::Key).kind, TokenKind::KeyGroup);
        assert_eq!(
            first_token("[a]", LexMode::Value).kind,
            TokenKind::LeftBracket
        );
    }

    #[test]
    fn test_booleans_in_value_mode() {
        assert_eq!(
            kinds("[true, false]", LexMode::Value),
            vec![
                TokenKind::LeftBracket,
                TokenKind::True,
                TokenKind::Comma,
                TokenKind::False,
                TokenKind::RightBracket,
            ]
        );
        assert_eq!(first_token("true", LexMode::Key).kind, TokenKind::Key);
    }

    #[test]
    fn test_unknown_bare_word_in_value_mode() {
        let mut lexer = Lexer::new("yes");
        lexer.set_mode(LexMode::Value);
        let err = lexer.next_token().unwrap_err();
        assert!(err.to_string().contains("unknown value type"));
    }

    #[test]
    fn test_comments_and_lines() {
        let mut lexer = Lexer::new("# header\n\n  # indented\nkey = 1");
        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Key);
        assert_eq!(token.pos, Position::new(4, 1));
    }

    #[test]
    fn test_trailing_garbage_after_key_group() {
        let mut lexer = Lexer::new("[a.b]  \t x\n");
        let err = lexer.next_token().unwrap_err();
        assert!(err.is_lexical());
        assert!(err.to_string().contains("unexpected character at end of line"));

        let mut lexer = Lexer::new("[a.b]  \t\nk = 1");
        assert_eq!(lexer.next_token().unwrap().unwrap().text, "a.b");
        assert_eq!(lexer.position().line, 2);
    }

    #[test]
    fn test_invalid_key_groups() {
        for src in ["[1a]", "[a..b]", "[a.]", "[]", "[a-b]", "[a"] {
            let mut lexer = Lexer::new(src);
            let err = lexer.next_token().unwrap_err();
            assert!(
                err.to_string().contains("invalid keygroup"),
                "{src}: {err}"
            );
        }
    }

    #[test]
    fn test_string_errors() {
        let mut lexer = Lexer::new("\"abc\\q\"");
        let err = lexer.next_token().unwrap_err();
        assert!(err.to_string().contains("unknown escape sequence"));

        let mut lexer = Lexer::new("\"abc\nd\"");
        let err = lexer.next_token().unwrap_err();
        assert!(err.to_string().contains("unexpected end of line"));
        assert_eq!(err.line(), Some(1));

        let mut lexer = Lexer::new("\"abc");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_unexpected_token() {
        let mut lexer = Lexer::new("\n  @");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.position(), Some(Position::new(2, 3)));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_invalid_key_terminator() {
        let mut lexer = Lexer::new("key.sub = 1");
        let err = lexer.next_token().unwrap_err();
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_end_of_input() {
        let mut lexer = Lexer::new("   \n\t# only a comment");
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }
}
