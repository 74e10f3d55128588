//! Typed, shaped container values of the MAT file model.
//!
//! A [`MatArray`] is one value as the container format stores it: an
//! element class, a dimension-size sequence in the format's own
//! (column-major) axis order, and either a typed buffer, named struct
//! fields, or an ordered cell sequence. Construction goes through
//! [`MatArray::from_parts`], which enforces the format's invariants, so a
//! `MatArray` in hand is always internally consistent.
//!
//! Session adapters that encounter a class this model does not cover
//! (sparse, complex, objects) represent it as [`MatData::Unknown`]; the
//! decoder degrades such values to a diagnostic string rather than
//! failing.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Element class of a container value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassId {
    Double,
    Single,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Logical,
    Char,
    Cell,
    Struct,
    Function,
    Unknown,
}

impl ClassId {
    /// Lower-case name of the class, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ClassId::Double => "double",
            ClassId::Single => "single",
            ClassId::Int8 => "int8",
            ClassId::Uint8 => "uint8",
            ClassId::Int16 => "int16",
            ClassId::Uint16 => "uint16",
            ClassId::Int32 => "int32",
            ClassId::Uint32 => "uint32",
            ClassId::Int64 => "int64",
            ClassId::Uint64 => "uint64",
            ClassId::Logical => "logical",
            ClassId::Char => "char",
            ClassId::Cell => "cell",
            ClassId::Struct => "struct",
            ClassId::Function => "function",
            ClassId::Unknown => "unknown",
        }
    }
}

/// Named struct fields: each field holds one slot per struct element.
///
/// Field iteration follows insertion order, so one decode call always sees
/// the same field order.
pub type StructFields = IndexMap<String, Vec<Option<MatArray>>>;

/// Payload of a container value, tagged by element class.
///
/// Cell slots and struct field slots are `Option` because the stored form
/// can leave individual entries absent; absent entries decode to the
/// `"NULL"` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum MatData {
    Double(Vec<f64>),
    Single(Vec<f32>),
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int64(Vec<i64>),
    Uint64(Vec<u64>),
    Logical(Vec<u8>),
    Char(String),
    Cell(Vec<Option<MatArray>>),
    Struct(StructFields),
    Function,
    Unknown,
}

impl MatData {
    /// The element class this payload carries.
    #[must_use]
    pub const fn class(&self) -> ClassId {
        match self {
            MatData::Double(_) => ClassId::Double,
            MatData::Single(_) => ClassId::Single,
            MatData::Int8(_) => ClassId::Int8,
            MatData::Uint8(_) => ClassId::Uint8,
            MatData::Int16(_) => ClassId::Int16,
            MatData::Uint16(_) => ClassId::Uint16,
            MatData::Int32(_) => ClassId::Int32,
            MatData::Uint32(_) => ClassId::Uint32,
            MatData::Int64(_) => ClassId::Int64,
            MatData::Uint64(_) => ClassId::Uint64,
            MatData::Logical(_) => ClassId::Logical,
            MatData::Char(_) => ClassId::Char,
            MatData::Cell(_) => ClassId::Cell,
            MatData::Struct(_) => ClassId::Struct,
            MatData::Function => ClassId::Function,
            MatData::Unknown => ClassId::Unknown,
        }
    }
}

/// One typed, shaped value in the container format.
///
/// Invariants, checked at construction:
/// - rank ≥ 1
/// - the payload holds exactly `product(dims)` elements (bytes for char,
///   slots for cell, slots per field for struct)
#[derive(Debug, Clone, PartialEq)]
pub struct MatArray {
    dims: Vec<usize>,
    data: MatData,
}

impl MatArray {
    /// Creates a container value from dimensions and a payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for rank zero and
    /// [`Error::ShapeMismatch`] when the payload length disagrees with the
    /// element count (for structs, when any field's slot count does).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matbridge::{MatArray, MatData};
    ///
    /// let a = MatArray::from_parts(vec![2, 3], MatData::Double(vec![0.0; 6])).unwrap();
    /// assert_eq!(a.element_count(), 6);
    /// ```
    pub fn from_parts(dims: Vec<usize>, data: MatData) -> Result<Self> {
        if dims.is_empty() {
            return Err(Error::unsupported("container rank must be at least 1"));
        }
        let count: usize = dims.iter().product();
        let found = match &data {
            MatData::Double(v) => v.len(),
            MatData::Single(v) => v.len(),
            MatData::Int8(v) => v.len(),
            MatData::Uint8(v) => v.len(),
            MatData::Int16(v) => v.len(),
            MatData::Uint16(v) => v.len(),
            MatData::Int32(v) => v.len(),
            MatData::Uint32(v) => v.len(),
            MatData::Int64(v) => v.len(),
            MatData::Uint64(v) => v.len(),
            MatData::Logical(v) => v.len(),
            MatData::Char(s) => s.len(),
            MatData::Cell(slots) => slots.len(),
            MatData::Struct(fields) => {
                for slots in fields.values() {
                    if slots.len() != count {
                        return Err(Error::shape_mismatch(count, slots.len()));
                    }
                }
                count
            }
            MatData::Function | MatData::Unknown => count,
        };
        if found != count {
            return Err(Error::shape_mismatch(count, found));
        }
        Ok(MatArray { dims, data })
    }

    /// A 1-element int32 array, the encoded form of nil.
    #[must_use]
    pub fn scalar_i32(value: i32) -> Self {
        MatArray {
            dims: vec![1],
            data: MatData::Int32(vec![value]),
        }
    }

    /// A 1-element int8 array, the encoded form of a boolean.
    #[must_use]
    pub fn scalar_i8(value: i8) -> Self {
        MatArray {
            dims: vec![1],
            data: MatData::Int8(vec![value]),
        }
    }

    /// A 1-element double array, the encoded form of a number.
    #[must_use]
    pub fn scalar_f64(value: f64) -> Self {
        MatArray {
            dims: vec![1],
            data: MatData::Double(vec![value]),
        }
    }

    /// A 1×n char array holding the given text.
    #[must_use]
    pub fn text(value: &str) -> Self {
        MatArray {
            dims: vec![1, value.len()],
            data: MatData::Char(value.to_string()),
        }
    }

    // Encoder-internal constructors. These uphold the count invariant by
    // construction, so they skip the `from_parts` validation.

    /// A 1×n cell row sized by its slot count.
    pub(crate) fn cell_row(slots: Vec<Option<MatArray>>) -> Self {
        let dims = vec![1, slots.len()];
        MatArray {
            dims,
            data: MatData::Cell(slots),
        }
    }

    /// A 1×1 struct. Caller keeps exactly one slot per field.
    pub(crate) fn struct_scalar(fields: StructFields) -> Self {
        MatArray {
            dims: vec![1, 1],
            data: MatData::Struct(fields),
        }
    }

    /// The element class of this value.
    #[inline]
    #[must_use]
    pub const fn class(&self) -> ClassId {
        self.data.class()
    }

    /// The dimension sizes, in the container format's own axis order.
    #[inline]
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of dimensions.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of the dimension sizes).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.dims.iter().product()
    }

    /// The payload.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &MatData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(ClassId::Uint16.name(), "uint16");
        assert_eq!(ClassId::Function.name(), "function");
        assert_eq!(MatData::Logical(vec![]).class(), ClassId::Logical);
    }

    #[test]
    fn test_from_parts_validates_count() {
        let err = MatArray::from_parts(vec![2, 2], MatData::Single(vec![0.0; 3]));
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));

        let err = MatArray::from_parts(vec![], MatData::Double(vec![]));
        assert!(err.is_err());
    }

    #[test]
    fn test_struct_fields_must_match_element_count() {
        let mut fields = StructFields::new();
        fields.insert("a".to_string(), vec![None, None]);
        let ok = MatArray::from_parts(vec![1, 2], MatData::Struct(fields.clone()));
        assert!(ok.is_ok());

        fields.insert("b".to_string(), vec![None]);
        let err = MatArray::from_parts(vec![1, 2], MatData::Struct(fields));
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_scalar_constructors() {
        assert_eq!(MatArray::scalar_i32(0).dims(), &[1]);
        assert_eq!(MatArray::scalar_i8(1).class(), ClassId::Int8);
        assert_eq!(MatArray::scalar_f64(2.5).element_count(), 1);
    }

    #[test]
    fn test_text_dims_follow_byte_length() {
        let t = MatArray::text("hello");
        assert_eq!(t.dims(), &[1, 5]);
        assert_eq!(t.class(), ClassId::Char);

        let empty = MatArray::text("");
        assert_eq!(empty.dims(), &[1, 0]);
        assert_eq!(empty.element_count(), 0);
    }

    #[test]
    fn test_function_and_unknown_carry_no_payload() {
        let f = MatArray::from_parts(vec![1, 1], MatData::Function).unwrap();
        assert_eq!(f.class(), ClassId::Function);
        let u = MatArray::from_parts(vec![1, 1], MatData::Unknown).unwrap();
        assert_eq!(u.class(), ClassId::Unknown);
    }
}
