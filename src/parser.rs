//! Assembles a token stream into a [`Tree`].
//!
//! The [`Parser`] pulls tokens from the [`Lexer`] one at a time and keeps two
//! pieces of state: the tree built so far and the active table scope. A
//! `Key` token is resolved into a value and stored under `scope.key`; a
//! `KeyGroup` token replaces the scope. Array values are resolved by
//! structural recursion, bounded by [`ParseOptions::max_depth`].
//!
//! The first error aborts the parse and the partial tree is dropped.

use crate::error::{Error, Result};
use crate::lexer::{LexMode, Lexer};
use crate::options::{DuplicateKeys, ParseOptions};
use crate::token::{Position, Token, TokenKind};
use crate::{Tree, Value};
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use tracing::{debug, trace};

/// Layout accepted for timestamp literals, always UTC.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    options: &'a ParseOptions,
    tree: Tree,
    scope: String,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(input),
            options,
            tree: Tree::new(),
            scope: String::new(),
        }
    }

    /// Consumes the whole input and returns the assembled tree.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or structural error encountered.
    pub fn run(mut self) -> Result<Tree> {
        while let Some(token) = self.lexer.next_token()? {
            match token.kind {
                TokenKind::Key => {
                    let value = self.key_value(&token)?;
                    self.set_key(&token, value)?;
                }
                TokenKind::KeyGroup => self.set_key_group(&token)?,
                _ => {
                    return Err(Error::syntax(
                        token.pos,
                        &format!("unexpected token {:?}", token.text),
                    ))
                }
            }
        }

        debug!(keys = self.tree.len(), "parsed document");
        Ok(self.tree)
    }

    /// Reads `= value` following a key.
    fn key_value(&mut self, key: &Token) -> Result<Value> {
        // `=` and the start of the value share the key's line
        match self.lexer.next_token()? {
            Some(token)
                if token.kind == TokenKind::Assignment && token.pos.line == key.pos.line => {}
            other => return Err(self.invalid_assignment(key, other)),
        }

        self.lexer.set_mode(LexMode::Value);
        let token = match self.lexer.next_token()? {
            Some(token) if token.kind.starts_value() && token.pos.line == key.pos.line => {
                token
            }
            other => return Err(self.invalid_assignment(key, other)),
        };
        let value = self.value(token, 0)?;
        self.lexer.set_mode(LexMode::Key);

        Ok(value)
    }

    fn invalid_assignment(&self, key: &Token, found: Option<Token>) -> Error {
        let pos = found.map_or_else(|| self.lexer.position(), |token| token.pos);
        Error::syntax(pos, &format!("invalid key assignment for {:?}", key.text))
    }

    fn value(&mut self, token: Token, depth: usize) -> Result<Value> {
        match token.kind {
            TokenKind::LeftBracket => self.array_value(token.pos, depth + 1),
            TokenKind::Numeric => numeric_value(&token.text, token.pos),
            TokenKind::True => Ok(Value::Boolean(true)),
            TokenKind::False => Ok(Value::Boolean(false)),
            TokenKind::String => Ok(Value::String(token.text)),
            _ => Err(Error::syntax(token.pos, "unknown value type")),
        }
    }

    /// Reads array elements after the opening bracket at `open`.
    fn array_value(&mut self, open: Position, depth: usize) -> Result<Value> {
        if depth > self.options.max_depth {
            return Err(Error::depth_limit(open, self.options.max_depth));
        }

        let mut elements = Vec::new();
        let mut token = self.expect_token()?;
        if token.kind == TokenKind::RightBracket {
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.value(token, depth)?);

            let separator = self.expect_token()?;
            match separator.kind {
                TokenKind::Comma => {
                    token = self.expect_token()?;
                    // trailing comma
                    if token.kind == TokenKind::RightBracket {
                        break;
                    }
                }
                TokenKind::RightBracket => break,
                _ => return Err(Error::syntax(separator.pos, "invalid array value")),
            }
        }

        Ok(Value::Array(elements))
    }

    fn expect_token(&mut self) -> Result<Token> {
        self.lexer
            .next_token()?
            .ok_or_else(|| Error::syntax(self.lexer.position(), "invalid array value"))
    }

    fn set_key(&mut self, key: &Token, value: Value) -> Result<()> {
        let full_key = if self.scope.is_empty() {
            key.text.clone()
        } else {
            format!("{}.{}", self.scope, key.text)
        };

        if self.options.duplicate_keys == DuplicateKeys::Reject && self.tree.contains_key(&full_key)
        {
            return Err(Error::syntax(
                key.pos,
                &format!("duplicate key {:?}", full_key),
            ));
        }

        trace!(key = %full_key, value = %value, "assigned");
        self.tree.insert(full_key, value);
        Ok(())
    }

    /// Switches scope to an absolute table path.
    ///
    /// Neither the path itself nor any of its parents may already hold a value.
    fn set_key_group(&mut self, group: &Token) -> Result<()> {
        let path = group.text.as_str();
        let parents = path.match_indices('.').map(|(idx, _)| &path[..idx]);

        if let Some(taken) = parents.chain(Some(path)).find(|p| self.tree.contains_key(p)) {
            return Err(Error::syntax(
                group.pos,
                &format!("invalid keygroup {:?}: {:?} already holds a value", path, taken),
            ));
        }

        debug!(scope = %path, "entered table");
        self.scope = path.to_string();
        Ok(())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a numeric literal as an integer, a float or a UTC timestamp.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] when the literal is none of the three,
/// or an integer that does not fit in `i64`.
pub(crate) fn numeric_value(text: &str, pos: Position) -> Result<Value> {
    if is_digits(text) {
        return text
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| Error::invalid_number(pos, text));
    }

    if let Some((whole, fraction)) = text.split_once('.') {
        if is_digits(whole) && is_digits(fraction) {
            return text
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float)
                .ok_or_else(|| Error::invalid_number(pos, text));
        }
    }

    parse_timestamp(text)
        .map(Value::Timestamp)
        .ok_or_else(|| Error::invalid_number(pos, text))
}

/// Parses exactly `YYYY-MM-DDTHH:MM:SSZ`, seconds `00` to `59`.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let shaped = text.len() == 20
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            19 => b == b'Z',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }

    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()?;
    // leap seconds parse as :59 with an overflowing nanosecond
    if naive.nanosecond() != 0 {
        return None;
    }
    Some(Utc.from_utc_datetime(&naive))
}
