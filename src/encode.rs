//! Encoding scripting values into container values.
//!
//! [`encode`] classifies one scripting value and builds the container
//! value it stores as. A `None` result means the value has no container
//! representation; callers warn and skip it, so one unsupported value
//! never aborts a save.
//!
//! Tables become 1×1 structs. Pairs under array-like keys (any key whose
//! textual form starts with an ASCII digit) are buffered in an
//! [`IndexCollector`] and materialized as a cell array under the fixed
//! field name `"array"`; the other pairs become named fields.

use crate::collect::IndexCollector;
use crate::container::{MatArray, MatData, StructFields};
use crate::table::ScriptTable;
use crate::tensor::{Tensor, TensorData};
use crate::value::ScriptValue;

/// Field and top-level variable name for collected positional entries.
pub(crate) const ARRAY_NAME: &str = "array";

/// Converts one scripting value into the corresponding container value,
/// or `None` when the value has no container representation (callables,
/// tensors of element kinds the format does not store).
///
/// # Examples
///
/// ```rust
/// use matbridge::{encode, ClassId, ScriptValue};
///
/// let out = encode(&ScriptValue::Number(2.5)).unwrap();
/// assert_eq!(out.class(), ClassId::Double);
/// assert_eq!(out.dims(), &[1]);
///
/// assert!(encode(&ScriptValue::Function).is_none());
/// ```
#[must_use]
pub fn encode(value: &ScriptValue) -> Option<MatArray> {
    match value {
        ScriptValue::Nil => Some(MatArray::scalar_i32(0)),
        ScriptValue::Bool(b) => Some(MatArray::scalar_i8(i8::from(*b))),
        ScriptValue::Number(n) => Some(MatArray::scalar_f64(*n)),
        ScriptValue::String(s) => Some(MatArray::text(s)),
        ScriptValue::Tensor(tensor) => encode_tensor(tensor),
        ScriptValue::Table(table) => Some(encode_table(table)),
        ScriptValue::Function => None,
    }
}

/// Dense numeric array from a tensor: dimensions reversed back into the
/// container's axis order, buffer copied from a contiguity-normalized
/// view. Only double and float tensors are storable.
fn encode_tensor(tensor: &Tensor) -> Option<MatArray> {
    let compact = tensor.to_contiguous();
    let mut dims = compact.dims().to_vec();
    dims.reverse();
    let data = match compact.into_data() {
        TensorData::Double(v) => MatData::Double(v),
        TensorData::Float(v) => MatData::Single(v),
        _ => return None,
    };
    MatArray::from_parts(dims, data).ok()
}

fn encode_table(table: &ScriptTable) -> MatArray {
    let mut fields = StructFields::new();
    let mut collector = IndexCollector::new();
    for (key, value) in table {
        let Some(data) = encode(value) else {
            log::warn!("'{}' is ignored as it is an unsupported type", key);
            continue;
        };
        if key.is_array_like() {
            collector.push(key.index_value(), data);
        } else {
            fields.insert(key.text(), vec![Some(data)]);
        }
    }
    if !collector.is_empty() {
        fields.insert(ARRAY_NAME.to_string(), vec![Some(collector.into_cell())]);
    }
    MatArray::struct_scalar(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ClassId;
    use crate::table::TableKey;

    fn field<'a>(out: &'a MatArray, name: &str) -> Option<&'a MatArray> {
        match out.data() {
            MatData::Struct(fields) => fields.get(name)?.first()?.as_ref(),
            _ => None,
        }
    }

    #[test]
    fn test_scalar_sentinels() {
        let nil = encode(&ScriptValue::Nil).unwrap();
        assert_eq!(nil.class(), ClassId::Int32);
        assert_eq!(nil.data(), &MatData::Int32(vec![0]));

        let yes = encode(&ScriptValue::Bool(true)).unwrap();
        assert_eq!(yes.data(), &MatData::Int8(vec![1]));
        let no = encode(&ScriptValue::Bool(false)).unwrap();
        assert_eq!(no.data(), &MatData::Int8(vec![0]));

        let num = encode(&ScriptValue::Number(1.5)).unwrap();
        assert_eq!(num.data(), &MatData::Double(vec![1.5]));
    }

    #[test]
    fn test_string_becomes_char_row() {
        let out = encode(&ScriptValue::from("abc")).unwrap();
        assert_eq!(out.class(), ClassId::Char);
        assert_eq!(out.dims(), &[1, 3]);
    }

    #[test]
    fn test_tensor_dims_reverse_back() {
        let tensor = Tensor::from_data(
            TensorData::Double((0..24).map(f64::from).collect()),
            vec![2, 3, 4],
        )
        .unwrap();
        let out = encode(&ScriptValue::Tensor(tensor)).unwrap();
        assert_eq!(out.class(), ClassId::Double);
        assert_eq!(out.dims(), &[4, 3, 2]);
        match out.data() {
            MatData::Double(v) => assert_eq!(v.len(), 24),
            other => panic!("expected double, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_strided_tensor_is_compacted_first() {
        // Transposed view over a 2x3 row-major buffer.
        let view = Tensor::with_strides(
            TensorData::Float(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            vec![3, 2],
            vec![1, 3],
        )
        .unwrap();
        let out = encode(&ScriptValue::Tensor(view)).unwrap();
        assert_eq!(out.class(), ClassId::Single);
        assert_eq!(out.dims(), &[2, 3]);
        assert_eq!(
            out.data(),
            &MatData::Single(vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0])
        );
    }

    #[test]
    fn test_non_storable_tensor_kinds() {
        let int = Tensor::from_data(TensorData::Int(vec![1]), vec![1]).unwrap();
        assert!(encode(&ScriptValue::Tensor(int)).is_none());
        let byte = Tensor::from_data(TensorData::Byte(vec![1]), vec![1]).unwrap();
        assert!(encode(&ScriptValue::Tensor(byte)).is_none());
    }

    #[test]
    fn test_callable_is_unsupported() {
        assert!(encode(&ScriptValue::Function).is_none());
    }

    #[test]
    fn test_mixed_key_table() {
        let mut table = ScriptTable::new();
        table.insert(1, ScriptValue::from("x"));
        table.insert(2, ScriptValue::from("y"));
        table.insert("name", ScriptValue::Number(5.0));

        let out = encode(&ScriptValue::Table(table)).unwrap();
        assert_eq!(out.class(), ClassId::Struct);
        assert_eq!(out.dims(), &[1, 1]);

        let name = field(&out, "name").expect("name field");
        assert_eq!(name.data(), &MatData::Double(vec![5.0]));

        let array = field(&out, ARRAY_NAME).expect("array field");
        assert_eq!(array.dims(), &[1, 2]);
        match array.data() {
            MatData::Cell(slots) => {
                assert_eq!(
                    slots[0].as_ref().map(MatArray::data),
                    Some(&MatData::Char("x".to_string()))
                );
                assert_eq!(
                    slots[1].as_ref().map(MatArray::data),
                    Some(&MatData::Char("y".to_string()))
                );
            }
            other => panic!("expected cell, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_digit_leading_string_key_is_array_like() {
        let mut table = ScriptTable::new();
        table.insert("1", ScriptValue::from("first"));

        let out = encode(&ScriptValue::Table(table)).unwrap();
        let array = field(&out, ARRAY_NAME).expect("array field");
        assert_eq!(array.dims(), &[1, 1]);
        match out.data() {
            MatData::Struct(fields) => assert!(!fields.contains_key("1")),
            other => panic!("expected struct, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_unsupported_pair_is_dropped_not_fatal() {
        let mut table = ScriptTable::new();
        table.insert("callback", ScriptValue::Function);
        table.insert("kept", ScriptValue::Number(1.0));

        let out = encode(&ScriptValue::Table(table)).unwrap();
        match out.data() {
            MatData::Struct(fields) => {
                assert!(!fields.contains_key("callback"));
                assert!(fields.contains_key("kept"));
            }
            other => panic!("expected struct, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_unsupported_under_numeric_key_never_reaches_collector() {
        let mut table = ScriptTable::new();
        table.insert(1, ScriptValue::Function);
        table.insert(TableKey::from("k"), ScriptValue::from(true));

        let out = encode(&ScriptValue::Table(table)).unwrap();
        match out.data() {
            MatData::Struct(fields) => assert!(!fields.contains_key(ARRAY_NAME)),
            other => panic!("expected struct, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_empty_table_is_empty_struct() {
        let out = encode(&ScriptValue::Table(ScriptTable::new())).unwrap();
        assert_eq!(out.class(), ClassId::Struct);
        assert_eq!(out.dims(), &[1, 1]);
        match out.data() {
            MatData::Struct(fields) => assert!(fields.is_empty()),
            other => panic!("expected struct, got {:?}", other.class()),
        }
    }

    #[test]
    fn test_nested_table_becomes_nested_struct() {
        let mut inner = ScriptTable::new();
        inner.insert("deep", ScriptValue::from("value"));
        let mut outer = ScriptTable::new();
        outer.insert("inner", ScriptValue::Table(inner));

        let out = encode(&ScriptValue::Table(outer)).unwrap();
        let inner = field(&out, "inner").expect("inner field");
        assert_eq!(inner.class(), ClassId::Struct);
        let deep = field(inner, "deep").expect("deep field");
        assert_eq!(deep.data(), &MatData::Char("value".to_string()));
    }
}
