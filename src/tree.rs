//! Flat dotted-key map holding a parsed document.
//!
//! Tables are not nested maps: `[server]` followed by `port = 80` stores a
//! single entry under the key `server.port`. Lookups match the full dotted key
//! exactly; there is no prefix or wildcard matching.
//!
//! ## Why IndexMap?
//!
//! Entries iterate in the order keys first appeared in the document, which
//! keeps serialized output and debugging dumps stable.
//!
//! ## Examples
//!
//! ```rust
//! use toto::{from_str, Value};
//!
//! let tree = from_str("[server]\nport = 80\n").unwrap();
//!
//! assert_eq!(tree.get("server.port"), Some(&Value::Integer(80)));
//! assert_eq!(tree.get("server"), None);
//! assert_eq!(tree.get("port"), None);
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of fully qualified dotted keys to values.
///
/// # Examples
///
/// ```rust
/// use toto::{Tree, Value};
///
/// let mut tree = Tree::new();
/// tree.insert("database.port".to_string(), Value::from(5432));
/// tree.insert("database.host".to_string(), Value::from("db"));
///
/// let keys: Vec<_> = tree.keys().cloned().collect();
/// assert_eq!(keys, vec!["database.port", "database.host"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree(IndexMap<String, Value>);

impl Tree {
    /// Creates an empty `Tree`.
    #[must_use]
    pub fn new() -> Self {
        Tree(IndexMap::new())
    }

    /// Inserts a value under a dotted key.
    ///
    /// If the tree already held this key, the old value is replaced in place
    /// and returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::{Tree, Value};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert("key".to_string(), Value::from(42)).is_none());
    /// assert_eq!(tree.insert("key".to_string(), Value::from(43)), Some(Value::from(42)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value bound to exactly this dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in first-insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in first-insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in first-insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<Tree> for HashMap<String, Value> {
    fn from(tree: Tree) -> Self {
        tree.0.into_iter().collect()
    }
}

impl IntoIterator for Tree {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Tree {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Tree(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup_only() {
        let tree: Tree = vec![("a.b.c".to_string(), Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(tree.get("a.b.c"), Some(&Value::Integer(1)));
        assert!(tree.get("a.b").is_none());
        assert!(tree.get("a").is_none());
        assert!(tree.get("b.c").is_none());
        assert!(!tree.contains_key("a.b.c.d"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut tree = Tree::new();
        tree.insert("first".to_string(), Value::from(1));
        tree.insert("second".to_string(), Value::from(2));
        tree.insert("first".to_string(), Value::from(3));

        let entries: Vec<_> = tree.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("first".to_string(), Value::Integer(3)),
                ("second".to_string(), Value::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_into_hash_map() {
        let mut tree = Tree::new();
        tree.insert("k".to_string(), Value::from(true));
        let map: HashMap<String, Value> = tree.into();
        assert_eq!(map.get("k"), Some(&Value::Boolean(true)));
    }
}
