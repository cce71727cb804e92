//! # toto
//!
//! A small configuration parser for a useful subset of TOML.
//!
//! ## What does it read?
//!
//! Line comments, dotted table headers, and single-line assignments of
//! strings, integers, floats, booleans, UTC timestamps and (nested) arrays.
//! See [`grammar`] for the full description.
//!
//! ## What does it produce?
//!
//! A flat [`Tree`] mapping each fully qualified dotted key to a [`Value`].
//! Tables exist only as key prefixes: `[user.github]` followed by
//! `nickname = "TJ"` stores one entry, `user.github.nickname`.
//!
//! ## Quick Start
//!
//! ```rust
//! use toto::{from_str, Value};
//!
//! let doc = r#"
//! title = "TOML Example"
//!
//! [user]
//! name = "Tom Jones"
//!
//!   [user.github]
//!   nickname = "TJ"
//! "#;
//!
//! let tree = from_str(doc).unwrap();
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.get("user.github.nickname"), Some(&Value::from("TJ")));
//! ```
//!
//! ### Lenient Typed Access
//!
//! [`Conf`] wraps a tree with accessors that fall back to zero values:
//!
//! ```rust
//! use toto::Conf;
//!
//! let conf: Conf = "[database]\nports = [8001, 8002]\n".parse().unwrap();
//!
//! assert_eq!(conf.array("database.ports").map(|a| a.len()), Some(2));
//! assert_eq!(conf.int("database.missing"), 0);
//! ```
//!
//! ### Errors
//!
//! Parsing stops at the first problem and reports where it was found:
//!
//! ```rust
//! use toto::from_str;
//!
//! let err = from_str("enabled = yes").unwrap_err();
//! assert_eq!(err.line(), Some(1));
//! ```
//!
//! ## Logging
//!
//! The lexer and parser emit [`tracing`] events at `trace` and `debug`
//! level. Install a subscriber in the application to see them.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Array nesting is bounded by [`ParseOptions::max_depth`]
//! - No panics in the public API

pub mod conf;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
pub mod token;
pub mod tree;
pub mod value;

pub use conf::Conf;
pub use error::{Error, Result};
pub use lexer::{LexMode, Lexer};
pub use options::{DuplicateKeys, ParseOptions};
pub use parser::Parser;
pub use token::{Position, Token, TokenKind};
pub use tree::Tree;
pub use value::Value;

use std::fs::File;
use std::io;
use std::path::Path;

/// Parse a configuration document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use toto::{parse, Value};
/// use std::io::Cursor;
///
/// let tree = parse(Cursor::new("port = 8080\n")).unwrap();
/// assert_eq!(tree.get("port"), Some(&Value::Integer(8080)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and the
/// first lexical or structural error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<R: io::Read>(reader: R) -> Result<Tree> {
    parse_with_options(reader, &ParseOptions::default())
}

/// Parse a configuration document from an I/O stream with custom options.
///
/// # Errors
///
/// See [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options<R: io::Read>(mut reader: R, options: &ParseOptions) -> Result<Tree> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str_with_options(&input, options)
}

/// Parse a configuration document from a string.
///
/// # Examples
///
/// ```rust
/// use toto::{from_str, value};
///
/// let tree = from_str("a = [1, [2, 3], \"x\"]").unwrap();
/// assert_eq!(tree.get("a"), Some(&value!([1, [2, 3], "x"])));
/// ```
///
/// # Errors
///
/// Returns the first lexical or structural error, with its line and column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Tree> {
    from_str_with_options(s, &ParseOptions::default())
}

/// Parse a configuration document from a string with custom options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &ParseOptions) -> Result<Tree> {
    Parser::new(s, options).run()
}

/// Parse a configuration document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, and the first
/// parse error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Tree> {
    let s = std::str::from_utf8(v).map_err(Error::io)?;
    from_str(s)
}

/// Read and parse the configuration file at `path`.
///
/// The file handle is released before this returns, whatever the outcome.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, and the first
/// parse error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Tree> {
    let file = File::open(path)?;
    parse(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_twice_is_equal() {
        let doc = "[a]\nx = [1, 2.5, \"s\", true]\nwhen = 2013-02-24T17:26:21Z\n";
        assert_eq!(from_str(doc).unwrap(), from_str(doc).unwrap());
    }

    #[test]
    fn test_reader_and_slice_agree() {
        let doc = "k = \"v\"\n";
        let from_reader = parse(io::Cursor::new(doc)).unwrap();
        assert_eq!(from_reader, from_slice(doc.as_bytes()).unwrap());
        assert_eq!(from_reader, from_str(doc).unwrap());
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_slice(&[b'k', b' ', b'=', b' ', 0xff]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            from_path("/definitely/not/here.toml"),
            Err(Error::Io(_))
        ));
    }
}
