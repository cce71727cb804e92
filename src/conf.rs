//! Lenient typed access to a parsed configuration.
//!
//! [`Conf`] wraps a [`Tree`] and offers one accessor per value type. A
//! missing key or a value of another type yields the type's zero value
//! instead of an error:
//!
//! | Accessor | Fallback |
//! |----------|----------|
//! | [`Conf::string`] | `""` |
//! | [`Conf::int`] | `0` |
//! | [`Conf::float`] | `0.0` |
//! | [`Conf::bool`] | `false` |
//! | [`Conf::array`] | `None` |
//! | [`Conf::timestamp`] | `None` |
//!
//! Use [`Conf::get`] when the difference between "absent" and "zero"
//! matters.
//!
//! ## Examples
//!
//! ```rust
//! use toto::Conf;
//!
//! let conf: Conf = "[database]\nconnection_max = 5000\nenabled = true\n"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(conf.int("database.connection_max"), 5000);
//! assert!(conf.bool("database.enabled"));
//! assert_eq!(conf.string("database.connection_max"), "");
//! assert_eq!(conf.int("undefined.int"), 0);
//! ```

use crate::{Error, ParseOptions, Result, Tree, Value};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace};

/// A parsed configuration with zero-value defaulting accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conf {
    tree: Tree,
}

impl Conf {
    /// Reads and parses the file at `path`.
    ///
    /// The file is closed before this returns, on success and on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, or the
    /// first parse error in its contents.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, &ParseOptions::default())
    }

    /// Reads and parses the file at `path` with custom options.
    ///
    /// # Errors
    ///
    /// See [`Conf::open`].
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let file = File::open(path)
            .map_err(|e| Error::io(format!("{}: {}", path.display(), e)))?;
        Self::from_reader_with_options(file, options)
    }

    /// Parses a configuration from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, or the first parse error.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, &ParseOptions::default())
    }

    /// Parses a configuration from any reader with custom options.
    ///
    /// # Errors
    ///
    /// See [`Conf::from_reader`].
    pub fn from_reader_with_options<R: io::Read>(reader: R, options: &ParseOptions) -> Result<Self> {
        crate::parse_with_options(reader, options).map(Conf::from)
    }

    /// Returns the value bound to exactly this dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tree.get(key)
    }

    /// Returns the string at `key` as written (escapes included), or `""`.
    #[must_use]
    pub fn string(&self, key: &str) -> &str {
        self.typed(key, "string", Value::as_str).unwrap_or("")
    }

    /// Returns the integer at `key`, or `0`.
    #[must_use]
    pub fn int(&self, key: &str) -> i64 {
        self.typed(key, "integer", Value::as_i64).unwrap_or(0)
    }

    /// Returns the float at `key`, or `0.0`.
    ///
    /// Integers are widened to `f64`.
    #[must_use]
    pub fn float(&self, key: &str) -> f64 {
        self.typed(key, "float", Value::as_f64).unwrap_or(0.0)
    }

    /// Returns the boolean at `key`, or `false`.
    #[must_use]
    pub fn bool(&self, key: &str) -> bool {
        self.typed(key, "boolean", Value::as_bool).unwrap_or(false)
    }

    /// Returns the array at `key`, or `None`.
    #[must_use]
    pub fn array(&self, key: &str) -> Option<&[Value]> {
        self.typed(key, "array", Value::as_array).map(Vec::as_slice)
    }

    /// Returns the timestamp at `key`, or `None`.
    #[must_use]
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.typed(key, "timestamp", Value::as_timestamp).copied()
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.tree.get(key)?;
        let extracted = extract(value);
        if extracted.is_none() {
            trace!(key, expected, found = value.type_name(), "type mismatch, using default");
        }
        extracted
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn into_tree(self) -> Tree {
        self.tree
    }
}

impl From<Tree> for Conf {
    fn from(tree: Tree) -> Self {
        Conf { tree }
    }
}

impl FromStr for Conf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s).map(Conf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn conf(src: &str) -> Conf {
        src.parse().unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let conf = conf(
            "title = \"TOML Example\"\nratio = 0.5\ncount = 3\non = true\nwhen = 1979-05-27T07:32:00Z\nlist = [1, 2]\n",
        );
        assert_eq!(conf.string("title"), "TOML Example");
        assert_eq!(conf.float("ratio"), 0.5);
        assert_eq!(conf.float("count"), 3.0);
        assert_eq!(conf.int("count"), 3);
        assert!(conf.bool("on"));
        assert_eq!(
            conf.timestamp("when"),
            Some(Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap())
        );
        assert_eq!(
            conf.array("list"),
            Some(&[Value::Integer(1), Value::Integer(2)][..])
        );
    }

    #[test]
    fn test_missing_keys_default() {
        let conf = conf("");
        assert_eq!(conf.string("undefined.string"), "");
        assert_eq!(conf.int("undefined.int"), 0);
        assert_eq!(conf.float("undefined.float"), 0.0);
        assert!(!conf.bool("undefined.bool"));
        assert!(conf.array("undefined.array").is_none());
        assert!(conf.timestamp("undefined.timestamp").is_none());
    }

    #[test]
    fn test_type_mismatch_defaults() {
        let conf = conf("s = \"5\"\nn = 5\n");
        assert_eq!(conf.int("s"), 0);
        assert_eq!(conf.string("n"), "");
        assert!(!conf.bool("n"));
        assert!(conf.array("n").is_none());
        assert_eq!(conf.get("n"), Some(&Value::Integer(5)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Conf::open("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("here.toml")));
    }
}
