//! # matbridge
//!
//! A bidirectional converter between MAT-container values (the typed,
//! shaped, hierarchical values a MAT session stores) and the dynamic
//! value model of a Lua-style scripting runtime, where dense numeric data
//! lives in [`Tensor`] values and composite data in ordered [`ScriptTable`]s.
//!
//! ## Key Features
//!
//! - **Total decoding**: every container value converts; unsupported or
//!   absent entries degrade to diagnostic strings instead of failing the
//!   whole load
//! - **Axis-order handling**: the container's column-major dimension
//!   order and the tensor's row-major order are reconciled by reversing
//!   the dimension sequence, with buffers copied verbatim
//! - **Warn-and-skip saving**: a value with no container representation
//!   is dropped with a warning through the [`log`] facade, never an error
//! - **Pluggable sessions**: the file layer is behind the [`Source`] and
//!   [`Sink`] traits; [`MemFile`] ships as an in-memory adapter
//!
//! ## Quick Start
//!
//! ```rust
//! use matbridge::{load, save_table, table, MemFile, ScriptValue};
//!
//! // Save a table: named entries become named variables.
//! let mut file = MemFile::new();
//! let data = table! {
//!     "gain" => 2.5,
//!     "label" => "run-1",
//! };
//! save_table(&mut file, &data).unwrap();
//! assert!(file.get("gain").is_some());
//!
//! // Load it back: every variable decodes into one table entry.
//! let vars = load(&mut file).unwrap();
//! assert_eq!(vars.get("label").and_then(|v| v.as_str()), Some("run-1"));
//! // Numeric scalars come back as 1x1 tensors.
//! assert!(vars.get("gain").is_some_and(ScriptValue::is_tensor));
//! ```
//!
//! ## Conversion Rules
//!
//! The full type-mapping tables live in [`mapping`]. In short: numeric
//! arrays load as tensors (with uint16/uint32/logical narrowed
//! bit-for-bit to short/int/byte), char data loads as strings, structs
//! and cells load as tables; saving supports nil, booleans, numbers,
//! strings, double/float tensors, and tables, with array-like table keys
//! gathered into a dense cell array under the name `array`.

pub mod collect;
pub mod container;
pub mod decode;
pub mod encode;
pub mod error;
pub mod macros;
pub mod mapping;
pub mod session;
pub mod table;
pub mod tensor;
pub mod value;

pub use collect::IndexCollector;
pub use container::{ClassId, MatArray, MatData, StructFields};
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use session::{MemFile, Sink, Source};
pub use table::{ScriptTable, TableKey};
pub use tensor::{ElemKind, Tensor, TensorData};
pub use value::ScriptValue;

use std::io;

/// Variable name used when saving a single value.
const SINGLE_VALUE_NAME: &str = "x";

/// Loads every named value from a session into one table.
///
/// Each variable decodes via [`decode`] and lands under its own name.
/// Decoding is total, so the only errors are the session's.
///
/// # Examples
///
/// ```rust
/// use matbridge::{load, MatArray, MemFile, Sink};
///
/// let mut file = MemFile::new();
/// file.write_variable("msg", MatArray::text("hi")).unwrap();
///
/// let vars = load(&mut file).unwrap();
/// assert_eq!(vars.get("msg").and_then(|v| v.as_str()), Some("hi"));
/// ```
///
/// # Errors
///
/// Returns an error if the session fails while iterating.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<S: Source>(source: &mut S) -> Result<ScriptTable> {
    let mut vars = ScriptTable::new();
    while let Some((name, value)) = source.next_variable()? {
        let decoded = decode(&value);
        vars.insert(TableKey::Name(name), decoded);
    }
    Ok(vars)
}

/// Saves one value under the fixed variable name `x`.
///
/// An unsupported value is dropped with a warning; only session failures
/// are errors.
///
/// # Errors
///
/// Returns an error if the session fails to write.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_value<S: Sink>(sink: &mut S, value: &ScriptValue) -> Result<()> {
    match encode(value) {
        Some(out) => sink.write_variable(SINGLE_VALUE_NAME, out),
        None => {
            log::warn!(
                "'{}' is ignored as it is an unsupported type",
                SINGLE_VALUE_NAME
            );
            Ok(())
        }
    }
}

/// Saves a table of top-level values.
///
/// Pairs under non-array-like keys are written immediately, each as an
/// independent named variable. Pairs under array-like keys (textual form
/// starting with an ASCII digit) are buffered across the whole call and
/// written once at the end as a single cell-array variable named
/// `array`. A pair that fails to classify is dropped with a warning and
/// the rest of the table still saves.
///
/// # Examples
///
/// ```rust
/// use matbridge::{save_table, table, ClassId, MemFile};
///
/// let mut file = MemFile::new();
/// let data = table! {
///     1 => "first",
///     2 => "second",
///     "note" => "kept separate",
/// };
/// save_table(&mut file, &data).unwrap();
///
/// assert!(file.get("note").is_some());
/// assert_eq!(file.get("array").map(|v| v.class()), Some(ClassId::Cell));
/// ```
///
/// # Errors
///
/// Returns an error if the session fails to write.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_table<S: Sink>(sink: &mut S, table: &ScriptTable) -> Result<()> {
    let mut collector = IndexCollector::new();
    for (key, value) in table {
        let Some(out) = encode(value) else {
            log::warn!("'{}' is ignored as it is an unsupported type", key);
            continue;
        };
        if key.is_array_like() {
            collector.push(key.index_value(), out);
        } else {
            sink.write_variable(&key.text(), out)?;
        }
    }
    if !collector.is_empty() {
        sink.write_variable(encode::ARRAY_NAME, collector.into_cell())?;
    }
    Ok(())
}

/// Writes a double tensor of rank 1 or 2 as ASCII text, one row per line.
///
/// The tensor is compacted to the canonical layout first. Rank 2 writes
/// `dims[0]` lines of `dims[1]` space-separated values; rank 1 writes one
/// value per line.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] for non-double tensors or rank above 2,
/// and [`Error::Io`] if the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_tensor_ascii<W: io::Write>(writer: &mut W, tensor: &Tensor) -> Result<()> {
    if tensor.rank() > 2 {
        return Err(Error::unsupported(
            "ascii output only supports rank 1 or 2 tensors",
        ));
    }
    let compact = tensor.to_contiguous();
    let row_len = match compact.dims() {
        [_, cols] => *cols,
        _ => 1,
    };
    match compact.into_data() {
        TensorData::Double(values) => {
            if values.is_empty() {
                return Ok(());
            }
            for row in values.chunks(row_len) {
                let line = row
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(writer, "{}", line).map_err(|e| Error::io(&e.to_string()))?;
            }
            Ok(())
        }
        _ => Err(Error::unsupported("ascii output requires a double tensor")),
    }
}
