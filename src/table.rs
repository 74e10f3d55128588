//! Ordered table type for scripting values.
//!
//! This module provides [`ScriptTable`], a wrapper around [`IndexMap`] that
//! holds the keyed pairs of a scripting table, and [`TableKey`], the
//! integer-or-string key type. Keys are unique; iteration follows insertion
//! order, which keeps decode output deterministic within one call.
//!
//! ## Why IndexMap?
//!
//! The converters use `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: decoded fields appear in a consistent order
//! - **Iteration order**: pairs are iterated in insertion order
//! - **Compatibility**: easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use matbridge::{ScriptTable, ScriptValue, TableKey};
//!
//! let mut table = ScriptTable::new();
//! table.insert(TableKey::from("name"), ScriptValue::from("Alice"));
//! table.insert(TableKey::from(1), ScriptValue::from(30.0));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A table key: a positive integer index or a field name.
///
/// The save direction classifies keys by their *textual* form: any key
/// whose text starts with an ASCII digit counts as an array index, even
/// when it was originally a string. [`TableKey::index_value`] implements
/// the matching permissive parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableKey {
    Index(u32),
    Name(String),
}

impl TableKey {
    /// Returns `true` if this key is an integer index.
    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, TableKey::Index(_))
    }

    /// The textual form of the key (an index renders as its decimal digits).
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            TableKey::Index(i) => i.to_string(),
            TableKey::Name(s) => s.clone(),
        }
    }

    /// Returns `true` if the key's textual form starts with an ASCII digit.
    ///
    /// This is the classification rule used when saving a table: such keys
    /// are collected into a dense positional array instead of becoming
    /// named fields. A string key like `"123abc"` is array-like.
    #[must_use]
    pub fn is_array_like(&self) -> bool {
        match self {
            TableKey::Index(_) => true,
            TableKey::Name(s) => s.as_bytes().first().is_some_and(u8::is_ascii_digit),
        }
    }

    /// The integer index this key maps to when it is array-like.
    ///
    /// Integer keys return their own value. String keys are parsed
    /// permissively: the longest leading run of ASCII digits, so
    /// `"123abc"` yields 123 and a string with no leading digits yields 0.
    /// A run that overflows saturates to `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matbridge::TableKey;
    ///
    /// assert_eq!(TableKey::from(7).index_value(), 7);
    /// assert_eq!(TableKey::from("123abc").index_value(), 123);
    /// assert_eq!(TableKey::from("name").index_value(), 0);
    /// ```
    #[must_use]
    pub fn index_value(&self) -> u32 {
        match self {
            TableKey::Index(i) => *i,
            TableKey::Name(s) => {
                let digits: &str = {
                    let end = s
                        .as_bytes()
                        .iter()
                        .position(|b| !b.is_ascii_digit())
                        .unwrap_or(s.len());
                    &s[..end]
                };
                if digits.is_empty() {
                    0
                } else {
                    digits.parse::<u32>().unwrap_or(u32::MAX)
                }
            }
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKey::Index(i) => write!(f, "{}", i),
            TableKey::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for TableKey {
    fn from(value: u32) -> Self {
        TableKey::Index(value)
    }
}

impl From<&str> for TableKey {
    fn from(value: &str) -> Self {
        TableKey::Name(value.to_string())
    }
}

impl From<String> for TableKey {
    fn from(value: String) -> Self {
        TableKey::Name(value)
    }
}

/// An ordered table of keys to scripting values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion
/// order, which keeps conversion output deterministic.
///
/// # Examples
///
/// ```rust
/// use matbridge::{ScriptTable, ScriptValue, TableKey};
///
/// let mut table = ScriptTable::new();
/// table.insert(TableKey::from("first"), ScriptValue::from(1.0));
/// table.insert(TableKey::from("second"), ScriptValue::from(2.0));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = table.keys().map(|k| k.text()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptTable(IndexMap<TableKey, crate::ScriptValue>);

impl ScriptTable {
    /// Creates an empty `ScriptTable`.
    #[must_use]
    pub fn new() -> Self {
        ScriptTable(IndexMap::new())
    }

    /// Creates an empty `ScriptTable` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ScriptTable(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table already contained this key, the old value is returned.
    /// Keys stay unique; the pair keeps the original insertion position.
    pub fn insert(
        &mut self,
        key: impl Into<TableKey>,
        value: crate::ScriptValue,
    ) -> Option<crate::ScriptValue> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matbridge::{ScriptTable, ScriptValue};
    ///
    /// let mut table = ScriptTable::new();
    /// table.insert("key", ScriptValue::from(42.0));
    /// assert_eq!(table.get("key").and_then(|v| v.as_number()), Some(42.0));
    /// assert!(table.get(1).is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: impl Into<TableKey>) -> Option<&crate::ScriptValue> {
        self.0.get(&key.into())
    }

    /// Returns the number of pairs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the table, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, TableKey, crate::ScriptValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the table, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, TableKey, crate::ScriptValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, TableKey, crate::ScriptValue> {
        self.0.iter()
    }
}

impl IntoIterator for ScriptTable {
    type Item = (TableKey, crate::ScriptValue);
    type IntoIter = indexmap::map::IntoIter<TableKey, crate::ScriptValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScriptTable {
    type Item = (&'a TableKey, &'a crate::ScriptValue);
    type IntoIter = indexmap::map::Iter<'a, TableKey, crate::ScriptValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(TableKey, crate::ScriptValue)> for ScriptTable {
    fn from_iter<T: IntoIterator<Item = (TableKey, crate::ScriptValue)>>(iter: T) -> Self {
        ScriptTable(IndexMap::from_iter(iter))
    }
}
