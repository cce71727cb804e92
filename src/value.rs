//! Typed values stored in a configuration [`Tree`](crate::Tree).
//!
//! ## Core Types
//!
//! - [`Value`]: string, integer, float, boolean, UTC timestamp or array
//!
//! ## Usage Patterns
//!
//! ### Inspecting Values
//!
//! ```rust
//! use toto::{from_str, Value};
//!
//! let tree = from_str("port = 8080\nhosts = [\"alpha\", \"beta\"]").unwrap();
//!
//! assert_eq!(tree.get("port").and_then(Value::as_i64), Some(8080));
//! assert!(tree.get("hosts").map_or(false, Value::is_array));
//! ```
//!
//! ### Strict Extraction
//!
//! ```rust
//! use toto::Value;
//! use std::convert::TryFrom;
//!
//! let port = i64::try_from(Value::Integer(8080)).unwrap();
//! assert_eq!(port, 8080);
//! assert!(bool::try_from(Value::Integer(1)).is_err());
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A value bound to a dotted key.
///
/// Arrays may hold any mix of values, including other arrays.
///
/// # Examples
///
/// ```rust
/// use toto::Value;
///
/// let text = Value::from("hello");
/// let nested = Value::Array(vec![Value::from(1), Value::Array(vec![Value::from(2)])]);
///
/// assert!(text.is_string());
/// assert_eq!(nested.as_array().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Array(Vec<Value>),
}

impl Value {
    /// Returns a short name of the value's type, used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::Value;
    ///
    /// assert_eq!(Value::from(true).type_name(), "boolean");
    /// assert_eq!(Value::Array(vec![]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Array(_) => "array",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` for every value that is not an array.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !self.is_array()
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// The string is returned as written, escape sequences included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// Floats are not converted.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toto::Value;
    ///
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Timestamp(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("float", value.type_name()))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("boolean", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Timestamp(dt) => Ok(dt),
            other => Err(crate::Error::type_mismatch("timestamp", other.type_name())),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(crate::Error::type_mismatch("array", other.type_name())),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(Value::Integer(42)).unwrap(), 42);
        assert!(i64::try_from(Value::Float(42.0)).is_err());
        assert!(i64::try_from(Value::from("42")).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(Value::Float(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::Integer(42)).unwrap(), 42.0);
        assert!(f64::try_from(Value::Boolean(true)).is_err());
    }

    #[test]
    fn test_tryfrom_mismatch_message() {
        let err = bool::try_from(Value::Integer(1)).unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: expected boolean, found integer");
    }

    #[test]
    fn test_tryfrom_timestamp_and_array() {
        let dt = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
        assert_eq!(DateTime::<Utc>::try_from(Value::Timestamp(dt)).unwrap(), dt);

        let arr = Vec::<Value>::try_from(Value::Array(vec![Value::from(1)])).unwrap();
        assert_eq!(arr, vec![Value::Integer(1)]);
        assert!(String::try_from(Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_display() {
        let dt = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
        let value = Value::Array(vec![
            Value::from(1),
            Value::Array(vec![Value::Float(2.0), Value::from(true)]),
            Value::from("x"),
            Value::Timestamp(dt),
        ]);
        assert_eq!(
            value.to_string(),
            "[1, [2.0, true], \"x\", 1979-05-27T07:32:00Z]"
        );
    }

    #[test]
    fn test_inspectors() {
        let value = Value::Integer(7);
        assert!(value.is_integer());
        assert!(value.is_scalar());
        assert!(!value.is_float());
        assert_eq!(value.as_i64(), Some(7));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_timestamp(), None);
        assert_eq!(value.type_name(), "integer");
    }
}
