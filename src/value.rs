//! Dynamic value representation for the scripting runtime.
//!
//! This module provides the [`ScriptValue`] enum which represents any value
//! the embedding runtime can hand to or receive from the converters.
//!
//! ## Core Types
//!
//! - [`ScriptValue`]: an enum over nil, boolean, number, string, table,
//!   tensor, and an opaque callable
//! - [`ScriptTable`](crate::ScriptTable): the ordered keyed table
//! - [`Tensor`](crate::Tensor): the dense numeric value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use matbridge::ScriptValue;
//!
//! let nil = ScriptValue::Nil;
//! let boolean = ScriptValue::from(true);
//! let number = ScriptValue::from(42.0);
//! let text = ScriptValue::from("hello");
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use matbridge::ScriptValue;
//!
//! let value = ScriptValue::from(42.0);
//! assert!(value.is_number());
//! assert_eq!(value.as_number(), Some(42.0));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::{ScriptTable, Tensor};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed scripting runtime value.
///
/// The decode direction produces these; the encode direction classifies
/// them back into container values. `Function` stands in for runtime
/// callables the converter cannot represent: it is never produced by
/// decoding and always classifies as unsupported on encoding.
///
/// # Examples
///
/// ```rust
/// use matbridge::ScriptValue;
///
/// let num = ScriptValue::Number(42.0);
/// let text = ScriptValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert!(ScriptValue::Nil.is_nil());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ScriptValue {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    Table(ScriptTable),
    Tensor(Tensor),
    Function,
}

impl ScriptValue {
    /// Returns `true` if the value is nil.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, ScriptValue::Nil)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ScriptValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ScriptValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ScriptValue::String(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, ScriptValue::Table(_))
    }

    /// Returns `true` if the value is a tensor.
    #[inline]
    #[must_use]
    pub const fn is_tensor(&self) -> bool {
        matches!(self, ScriptValue::Tensor(_))
    }

    /// Returns `true` if the value is an opaque callable.
    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, ScriptValue::Function)
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScriptValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScriptValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&ScriptTable> {
        match self {
            ScriptValue::Table(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a tensor, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            ScriptValue::Tensor(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Nil => write!(f, "nil"),
            ScriptValue::Bool(b) => write!(f, "{}", b),
            ScriptValue::Number(n) => write!(f, "{}", n),
            ScriptValue::String(s) => write!(f, "{}", s),
            ScriptValue::Table(t) => write!(f, "table({} pairs)", t.len()),
            ScriptValue::Tensor(t) => {
                let dims = t
                    .dims()
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join("x");
                write!(f, "tensor<{}>({})", t.kind().name(), dims)
            }
            ScriptValue::Function => write!(f, "function"),
        }
    }
}

impl Serialize for ScriptValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScriptValue::Nil => serializer.serialize_unit(),
            ScriptValue::Bool(b) => serializer.serialize_bool(*b),
            ScriptValue::Number(n) => serializer.serialize_f64(*n),
            ScriptValue::String(s) => serializer.serialize_str(s),
            ScriptValue::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, value) in table.iter() {
                    map.serialize_entry(&key.text(), value)?;
                }
                map.end()
            }
            ScriptValue::Tensor(tensor) => tensor.serialize(serializer),
            ScriptValue::Function => serializer.serialize_str("function"),
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Number(value)
    }
}

impl From<f32> for ScriptValue {
    fn from(value: f32) -> Self {
        ScriptValue::Number(value as f64)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        ScriptValue::Number(value as f64)
    }
}

impl From<u32> for ScriptValue {
    fn from(value: u32) -> Self {
        ScriptValue::Number(value as f64)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<ScriptTable> for ScriptValue {
    fn from(value: ScriptTable) -> Self {
        ScriptValue::Table(value)
    }
}

impl From<Tensor> for ScriptValue {
    fn from(value: Tensor) -> Self {
        ScriptValue::Tensor(value)
    }
}
