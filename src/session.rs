//! Session boundary to the container file layer.
//!
//! The converters never open files themselves. They talk to two small
//! traits, [`Source`] (supplies named container values one at a time) and
//! [`Sink`] (accepts them), and an external adapter owns the actual file
//! handling. An adapter's open constructor is the one place a whole call
//! can fail: it reports [`Error::Open`](crate::Error::Open), and closing
//! happens on drop.
//!
//! [`MemFile`] is the in-memory adapter shipped with the crate. It backs
//! the test suites and gives embedders a session object that needs no
//! filesystem.

use crate::container::MatArray;
use crate::error::Result;
use indexmap::IndexMap;

/// Read side of a session: yields named top-level container values in
/// stored order.
pub trait Source {
    /// Returns the next named value, or `None` at the end of the sequence.
    fn next_variable(&mut self) -> Result<Option<(String, MatArray)>>;
}

/// Write side of a session: accepts one named top-level container value
/// per call.
pub trait Sink {
    fn write_variable(&mut self, name: &str, value: MatArray) -> Result<()>;
}

/// An in-memory session holding named container values in write order.
///
/// # Examples
///
/// ```rust
/// use matbridge::{MatArray, MemFile, Sink, Source};
///
/// let mut file = MemFile::new();
/// file.write_variable("a", MatArray::scalar_f64(1.0)).unwrap();
///
/// let (name, value) = file.next_variable().unwrap().expect("one variable");
/// assert_eq!(name, "a");
/// assert_eq!(value.element_count(), 1);
/// assert!(file.next_variable().unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemFile {
    vars: IndexMap<String, MatArray>,
    cursor: usize,
}

impl MemFile {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        MemFile {
            vars: IndexMap::new(),
            cursor: 0,
        }
    }

    /// Returns the stored value under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MatArray> {
        self.vars.get(name)
    }

    /// Number of stored variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates stored variable names in write order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Resets the read cursor to the first variable.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl Source for MemFile {
    fn next_variable(&mut self) -> Result<Option<(String, MatArray)>> {
        match self.vars.get_index(self.cursor) {
            Some((name, value)) => {
                self.cursor += 1;
                Ok(Some((name.clone(), value.clone())))
            }
            None => Ok(None),
        }
    }
}

impl Sink for MemFile {
    fn write_variable(&mut self, name: &str, value: MatArray) -> Result<()> {
        self.vars.insert(name.to_string(), value);
        Ok(())
    }
}
