//! Error types for MAT container conversion.
//!
//! Failures come in two tiers. Opening a session is the only fatal tier:
//! a [`Error::Open`] aborts the whole load or save call. Everything at the
//! level of a single field, element, or keyed pair stays non-fatal: the
//! converters degrade those to placeholder values or drop them with a
//! warning, and no error crosses the conversion boundary for them.
//!
//! ## Examples
//!
//! ```rust
//! use matbridge::Error;
//!
//! let err = Error::open("results.mat", "permission denied");
//! assert!(err.to_string().contains("results.mat"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting values
/// or talking to a session adapter.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The container file could not be opened for the requested operation.
    ///
    /// This is the only error that aborts an entire load or save call.
    #[error("cannot open '{path}': {reason}")]
    Open { path: String, reason: String },

    /// IO error reported by a session adapter during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// A buffer, dimension sequence, or stride descriptor is internally
    /// inconsistent (e.g. buffer length does not match the element count).
    #[error("shape mismatch: expected {expected} elements, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// The requested operation is not defined for this value.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates the fatal open-failure error for a session path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matbridge::Error;
    ///
    /// let err = Error::open("data.mat", "no such file");
    /// assert!(err.to_string().contains("no such file"));
    /// ```
    pub fn open(path: &str, reason: &str) -> Self {
        Error::Open {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for session read/write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a shape-mismatch error from an expected and an actual
    /// element count.
    pub fn shape_mismatch(expected: usize, found: usize) -> Self {
        Error::ShapeMismatch { expected, found }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matbridge::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
