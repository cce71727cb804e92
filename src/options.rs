//! Configuration options for parsing.
//!
//! - [`ParseOptions`]: main configuration struct
//! - [`DuplicateKeys`]: what to do when a key is assigned twice
//!
//! ## Examples
//!
//! ```rust
//! use toto::{from_str_with_options, DuplicateKeys, ParseOptions};
//!
//! let doc = "name = \"a\"\nname = \"b\"\n";
//!
//! // Last assignment wins by default
//! let tree = from_str_with_options(doc, &ParseOptions::new()).unwrap();
//! assert_eq!(tree.get("name").and_then(|v| v.as_str()), Some("b"));
//!
//! // Strict parsing rejects the second assignment
//! let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
//! assert!(from_str_with_options(doc, &options).is_err());
//! ```

/// Policy for a plain key that is assigned more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later assignment replaces the earlier one.
    #[default]
    LastWins,
    /// The later assignment is a structural error.
    Reject,
}

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use toto::ParseOptions;
///
/// let options = ParseOptions::new().with_max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of arrays inside a single value.
    pub max_depth: usize,
    pub duplicate_keys: DuplicateKeys,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 64,
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

impl ParseOptions {
    /// Creates default options (64 levels of array nesting, last write wins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject duplicate keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::{DuplicateKeys, ParseOptions};
    ///
    /// assert_eq!(ParseOptions::strict().duplicate_keys, DuplicateKeys::Reject);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            duplicate_keys: DuplicateKeys::Reject,
            ..Default::default()
        }
    }

    /// Sets the maximum array nesting depth.
    ///
    /// `a = [1]` has depth 1, `a = [[1]]` depth 2.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}
