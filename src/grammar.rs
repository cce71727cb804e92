//! Configuration Format
//!
//! This module documents the configuration language accepted by this crate.
//! It is a small subset of TOML: single-line scalars, dotted table headers,
//! flat and nested arrays, and line comments.
//!
//! # Overview
//!
//! ```text
//! # This is a TOML document.
//!
//! title = "TOML Example"
//!
//! [owner]
//! name = "Tom Preston-Werner"
//! dob = 1979-05-27T07:32:00Z
//!
//! [database]
//! server = "192.168.1.1"
//! ports = [ 8001, 8001, 8002 ]
//! connection_max = 5000
//! enabled = true
//!
//! [clients]
//! data = [ ["gamma", "delta"], [1, 2] ]
//! hosts = [
//!   "alpha",
//!   "omega",
//! ]
//! ```
//!
//! The document above produces these entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | `title` | `String("TOML Example")` |
//! | `owner.name` | `String("Tom Preston-Werner")` |
//! | `owner.dob` | `Timestamp(1979-05-27T07:32:00Z)` |
//! | `database.server` | `String("192.168.1.1")` |
//! | `database.ports` | `Array[Integer(8001), Integer(8001), Integer(8002)]` |
//! | `database.connection_max` | `Integer(5000)` |
//! | `database.enabled` | `Boolean(true)` |
//! | `clients.data` | `Array[Array[String, String], Array[Integer, Integer]]` |
//! | `clients.hosts` | `Array[String("alpha"), String("omega")]` |
//!
//! # Grammar
//!
//! ```text
//! document     := (comment | table-header | assignment | blank)*
//! comment      := '#' <any-but-newline>* newline
//! table-header := '[' segment ('.' segment)* ']' <spaces-or-tabs>* newline
//! segment      := letter (letter | digit | '_')*
//! assignment   := key ws* '=' ws* value
//! key          := letter (letter | digit | '_')*
//! value        := string | numeric | 'true' | 'false' | array
//! array        := '[' [value (',' value)* [',']] ']'
//! string       := '"' (escape | <any-but-quote-or-newline>)* '"'
//! escape       := '\' ('b' | 't' | 'n' | 'f' | 'r' | '"' | '/' | '\' | 'u')
//! numeric      := digit+ ['.' digit+] | timestamp
//! timestamp    := YYYY '-' MM '-' DD 'T' HH ':' MM ':' SS 'Z'
//! ```
//!
//! # Keys and Tables
//!
//! - A table header sets the scope for every following assignment until the
//!   next header. Headers are absolute: `[b]` after `[a]` is `b`, not `a.b`.
//! - Assignments are stored under `scope.key`, or just `key` before the first
//!   header. Lookups use that full dotted key and nothing else.
//! - A header whose path, or any parent of it, already holds a value is
//!   rejected: `a = 1` followed by `[a]` or `[a.b]` is an error.
//! - A key assigned twice keeps the last value, unless
//!   [`DuplicateKeys::Reject`](crate::DuplicateKeys::Reject) is set.
//!
//! # Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | String | `"..."` | `name = "Tom"` |
//! | Integer | Decimal digits, fits in `i64` | `port = 8080` |
//! | Float | Digits, a dot, digits | `ratio = 0.75` |
//! | Boolean | `true` or `false` | `enabled = true` |
//! | Timestamp | `YYYY-MM-DDTHH:MM:SSZ`, UTC only | `dob = 1979-05-27T07:32:00Z` |
//! | Array | `[v, v, ...]`, any mix, may nest | `data = [1, [2, 3], "x"]` |
//!
//! A numeric literal that is none of integer, float or timestamp is an
//! error; it never falls back to a string. Negative numbers, exponents and
//! time zone offsets are not part of the grammar.
//!
//! # Strings
//!
//! Escape sequences are checked but not decoded: `"a\tb"` is stored as the
//! four characters `a`, `\`, `t`, `b`. A raw newline or end of input before
//! the closing quote is an error.
//!
//! # Arrays
//!
//! - Elements are separated by commas; one trailing comma is allowed.
//! - `[]` is the empty array; an empty slot such as `[1,,2]` is an error.
//! - Arrays may span lines and contain comments between elements.
//! - Nesting depth is limited by
//!   [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
//!
//! # Limitations
//!
//! - No multi-line strings, literal strings or inline tables
//! - No arrays of tables (`[[name]]`)
//! - Keys are bare identifiers; quoted and dotted keys are not supported
//! - A table header must be alone on its line, trailing comments included

// This module contains only documentation; no implementation code
