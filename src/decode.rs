//! Decoding container values into scripting values.
//!
//! [`decode`] is total: every container value produces exactly one
//! scripting value. Data-shape anomalies never abort a decode; an
//! unsupported or absent entry degrades to a diagnostic string so sibling
//! entries still convert.
//!
//! Numeric leaves become tensors whose axis order is reversed relative to
//! the container dimensions (the container's first axis is the tensor's
//! last) and whose buffers are copied verbatim. Three classes narrow on
//! load for compatibility with the stored format: uint16 → short,
//! uint32 → int, logical → byte, all bit-for-bit.

use crate::container::{ClassId, MatArray, MatData, StructFields};
use crate::table::ScriptTable;
use crate::tensor::{Tensor, TensorData};
use crate::value::ScriptValue;

const NULL_PLACEHOLDER: &str = "NULL";
const LENGTH_KEY: &str = "Length";

/// Converts one container value into the corresponding scripting value.
///
/// # Examples
///
/// ```rust
/// use matbridge::{decode, MatArray, MatData};
///
/// let array = MatArray::from_parts(vec![1, 3], MatData::Double(vec![1.0, 2.0, 3.0])).unwrap();
/// let value = decode(&array);
/// assert_eq!(value.as_tensor().map(|t| t.dims().to_vec()), Some(vec![3, 1]));
/// ```
#[must_use]
pub fn decode(src: &MatArray) -> ScriptValue {
    match src.data() {
        MatData::Double(v) => tensor_value(TensorData::Double(v.clone()), src.dims()),
        MatData::Single(v) => tensor_value(TensorData::Float(v.clone()), src.dims()),
        MatData::Int32(v) => tensor_value(TensorData::Int(v.clone()), src.dims()),
        MatData::Uint32(v) => {
            tensor_value(TensorData::Int(v.iter().map(|&x| x as i32).collect()), src.dims())
        }
        MatData::Int16(v) => tensor_value(TensorData::Short(v.clone()), src.dims()),
        MatData::Uint16(v) => {
            tensor_value(TensorData::Short(v.iter().map(|&x| x as i16).collect()), src.dims())
        }
        MatData::Int8(v) => tensor_value(TensorData::Char(v.clone()), src.dims()),
        MatData::Uint8(v) => tensor_value(TensorData::Byte(v.clone()), src.dims()),
        MatData::Logical(v) => tensor_value(TensorData::Byte(v.clone()), src.dims()),
        MatData::Char(s) => ScriptValue::String(s.clone()),
        MatData::Cell(slots) => decode_cell(slots),
        MatData::Struct(fields) => decode_struct(fields, src.element_count()),
        MatData::Int64(_) | MatData::Uint64(_) | MatData::Function => {
            unsupported_text(src.class())
        }
        MatData::Unknown => ScriptValue::String("unknown type".to_string()),
    }
}

fn null_value() -> ScriptValue {
    ScriptValue::String(NULL_PLACEHOLDER.to_string())
}

fn unsupported_text(class: ClassId) -> ScriptValue {
    ScriptValue::String(format!("unsupported type: {}", class.name()))
}

/// Builds the tensor for one numeric leaf: container dimensions reversed,
/// buffer taken as-is.
fn tensor_value(data: TensorData, dims: &[usize]) -> ScriptValue {
    let mut reversed = dims.to_vec();
    reversed.reverse();
    match Tensor::from_data(data, reversed) {
        Ok(tensor) => ScriptValue::Tensor(tensor),
        // Unreachable for container values built through `from_parts`;
        // degrade like any other per-entry anomaly.
        Err(err) => ScriptValue::String(err.to_string()),
    }
}

/// Cells always flatten to one logical dimension: a table with `Length`
/// and 1-based integer keys over the element count, whatever the stored
/// rank was.
fn decode_cell(slots: &[Option<MatArray>]) -> ScriptValue {
    let mut table = ScriptTable::with_capacity(slots.len() + 1);
    table.insert(LENGTH_KEY, ScriptValue::Number(slots.len() as f64));
    for (i, slot) in slots.iter().enumerate() {
        let value = match slot {
            Some(element) => decode(element),
            None => null_value(),
        };
        table.insert(i as u32 + 1, value);
    }
    ScriptValue::Table(table)
}

fn decode_struct(fields: &StructFields, element_count: usize) -> ScriptValue {
    let mut table = ScriptTable::with_capacity(fields.len());
    for (name, slots) in fields {
        let value = if element_count < 1 {
            null_value()
        } else if element_count == 1 {
            match slots.first().and_then(Option::as_ref) {
                Some(element) => decode(element),
                None => null_value(),
            }
        } else {
            let mut nested = ScriptTable::with_capacity(element_count + 1);
            nested.insert(LENGTH_KEY, ScriptValue::Number(element_count as f64));
            for (i, slot) in slots.iter().enumerate() {
                let element = match slot {
                    Some(element) => decode(element),
                    None => null_value(),
                };
                nested.insert(i as u32 + 1, element);
            }
            ScriptValue::Table(nested)
        };
        table.insert(name.as_str(), value);
    }
    ScriptValue::Table(table)
}
