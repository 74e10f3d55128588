//! Dense, typed, multi-dimensional tensors with explicit shape and stride.
//!
//! A [`Tensor`] is the scripting-side representation of numeric array data:
//! an element kind, a dimension-size sequence, a stride per dimension, and
//! one contiguous owned buffer. Freshly built tensors are row-major with
//! unit stride on the fastest-varying (last) dimension;
//! [`Tensor::with_strides`] also admits transposed or otherwise irregular
//! views over a buffer, which [`Tensor::to_contiguous`] compacts back to
//! the canonical layout.
//!
//! ## Examples
//!
//! ```rust
//! use matbridge::{Tensor, TensorData};
//!
//! let t = Tensor::from_data(TensorData::Double(vec![1.0, 2.0, 3.0, 4.0]), vec![2, 2]).unwrap();
//! assert_eq!(t.dims(), &[2, 2]);
//! assert_eq!(t.strides(), &[2, 1]);
//! assert!(t.is_contiguous());
//! ```

use crate::error::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Element kind of a tensor, one per supported storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemKind {
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// 32-bit signed integer.
    Int,
    /// 16-bit signed integer.
    Short,
    /// 8-bit signed integer.
    Char,
    /// 8-bit unsigned integer.
    Byte,
}

impl ElemKind {
    /// Lower-case name of the kind, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ElemKind::Double => "double",
            ElemKind::Float => "float",
            ElemKind::Int => "int",
            ElemKind::Short => "short",
            ElemKind::Char => "char",
            ElemKind::Byte => "byte",
        }
    }

    /// Size in bytes of a single element.
    #[must_use]
    pub const fn element_size(self) -> usize {
        match self {
            ElemKind::Double => 8,
            ElemKind::Float => 4,
            ElemKind::Int => 4,
            ElemKind::Short => 2,
            ElemKind::Char | ElemKind::Byte => 1,
        }
    }
}

/// Owned element buffer of a tensor, one variant per [`ElemKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Double(Vec<f64>),
    Float(Vec<f32>),
    Int(Vec<i32>),
    Short(Vec<i16>),
    Char(Vec<i8>),
    Byte(Vec<u8>),
}

impl TensorData {
    /// The element kind stored in this buffer.
    #[must_use]
    pub const fn kind(&self) -> ElemKind {
        match self {
            TensorData::Double(_) => ElemKind::Double,
            TensorData::Float(_) => ElemKind::Float,
            TensorData::Int(_) => ElemKind::Int,
            TensorData::Short(_) => ElemKind::Short,
            TensorData::Char(_) => ElemKind::Char,
            TensorData::Byte(_) => ElemKind::Byte,
        }
    }

    /// Number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TensorData::Double(v) => v.len(),
            TensorData::Float(v) => v.len(),
            TensorData::Int(v) => v.len(),
            TensorData::Short(v) => v.len(),
            TensorData::Char(v) => v.len(),
            TensorData::Byte(v) => v.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dense, typed, multi-dimensional numeric value.
///
/// Invariants, checked at construction:
/// - rank ≥ 1 and one stride per dimension
/// - for [`Tensor::from_data`], buffer length equals the product of the
///   dimension sizes
/// - for [`Tensor::with_strides`], every addressable offset stays inside
///   the buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: TensorData,
    dims: Vec<usize>,
    strides: Vec<usize>,
}

fn row_major_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; dims.len()];
    for ax in (0..dims.len().saturating_sub(1)).rev() {
        strides[ax] = strides[ax + 1] * dims[ax + 1];
    }
    strides
}

fn gather<T: Copy>(data: &[T], dims: &[usize], strides: &[usize]) -> Vec<T> {
    let count: usize = dims.iter().product();
    let mut out = Vec::with_capacity(count);
    let mut index = vec![0usize; dims.len()];
    let mut offset = 0usize;
    for _ in 0..count {
        out.push(data[offset]);
        for ax in (0..dims.len()).rev() {
            index[ax] += 1;
            offset += strides[ax];
            if index[ax] < dims[ax] {
                break;
            }
            offset -= strides[ax] * dims[ax];
            index[ax] = 0;
        }
    }
    out
}

impl Tensor {
    /// Creates a contiguous row-major tensor from a buffer and dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the buffer length does not match
    /// the product of the dimension sizes, or [`Error::Unsupported`] for a
    /// rank of zero.
    pub fn from_data(data: TensorData, dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() {
            return Err(Error::unsupported("tensor rank must be at least 1"));
        }
        let count: usize = dims.iter().product();
        if data.len() != count {
            return Err(Error::shape_mismatch(count, data.len()));
        }
        let strides = row_major_strides(&dims);
        Ok(Tensor {
            data,
            dims,
            strides,
        })
    }

    /// Creates a tensor viewing a buffer through explicit strides.
    ///
    /// The buffer may be larger than the addressed region (for example a
    /// transposed view). Offsets are validated so element access can never
    /// leave the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for rank zero or a stride count that
    /// differs from the rank, and [`Error::ShapeMismatch`] if the largest
    /// addressable offset falls outside the buffer.
    pub fn with_strides(data: TensorData, dims: Vec<usize>, strides: Vec<usize>) -> Result<Self> {
        if dims.is_empty() {
            return Err(Error::unsupported("tensor rank must be at least 1"));
        }
        if strides.len() != dims.len() {
            return Err(Error::unsupported("one stride per dimension required"));
        }
        let count: usize = dims.iter().product();
        if count > 0 {
            let max_offset: usize = dims
                .iter()
                .zip(&strides)
                .map(|(&d, &s)| (d - 1) * s)
                .sum();
            if max_offset >= data.len() {
                return Err(Error::shape_mismatch(max_offset + 1, data.len()));
            }
        }
        Ok(Tensor {
            data,
            dims,
            strides,
        })
    }

    /// The element kind of this tensor.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ElemKind {
        self.data.kind()
    }

    /// The dimension sizes.
    #[inline]
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The stride of each dimension, in elements.
    #[inline]
    #[must_use]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of addressed elements (product of the dimension sizes).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.dims.iter().product()
    }

    /// The underlying element buffer.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Consumes the tensor, returning its element buffer.
    #[must_use]
    pub fn into_data(self) -> TensorData {
        self.data
    }

    /// Returns `true` if the tensor is laid out in canonical row-major
    /// order with no gaps.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.strides == row_major_strides(&self.dims)
    }

    /// Returns a tensor with the same logical contents compacted into the
    /// canonical row-major layout.
    ///
    /// Always materializes an owned buffer; the result never aliases
    /// `self`. A tensor that is already contiguous is copied as-is.
    #[must_use]
    pub fn to_contiguous(&self) -> Tensor {
        if self.is_contiguous() {
            return self.clone();
        }
        let data = match &self.data {
            TensorData::Double(v) => TensorData::Double(gather(v, &self.dims, &self.strides)),
            TensorData::Float(v) => TensorData::Float(gather(v, &self.dims, &self.strides)),
            TensorData::Int(v) => TensorData::Int(gather(v, &self.dims, &self.strides)),
            TensorData::Short(v) => TensorData::Short(gather(v, &self.dims, &self.strides)),
            TensorData::Char(v) => TensorData::Char(gather(v, &self.dims, &self.strides)),
            TensorData::Byte(v) => TensorData::Byte(gather(v, &self.dims, &self.strides)),
        };
        Tensor {
            data,
            strides: row_major_strides(&self.dims),
            dims: self.dims.clone(),
        }
    }
}

impl Serialize for Tensor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let compact = self.to_contiguous();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("kind", compact.kind().name())?;
        map.serialize_entry("dims", compact.dims())?;
        match compact.data() {
            TensorData::Double(v) => map.serialize_entry("data", v)?,
            TensorData::Float(v) => map.serialize_entry("data", v)?,
            TensorData::Int(v) => map.serialize_entry("data", v)?,
            TensorData::Short(v) => map.serialize_entry("data", v)?,
            TensorData::Char(v) => map.serialize_entry("data", v)?,
            TensorData::Byte(v) => map.serialize_entry("data", v)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_strides() {
        assert_eq!(row_major_strides(&[4]), vec![1]);
        assert_eq!(row_major_strides(&[2, 3]), vec![3, 1]);
        assert_eq!(row_major_strides(&[2, 3, 4]), vec![12, 4, 1]);
    }

    #[test]
    fn test_from_data_validates_length() {
        let err = Tensor::from_data(TensorData::Double(vec![1.0, 2.0]), vec![3]);
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));

        let err = Tensor::from_data(TensorData::Double(vec![]), vec![]);
        assert!(err.is_err());
    }

    #[test]
    fn test_element_count_and_kind() {
        let t = Tensor::from_data(TensorData::Short(vec![0; 6]), vec![2, 3]).unwrap();
        assert_eq!(t.element_count(), 6);
        assert_eq!(t.kind(), ElemKind::Short);
        assert_eq!(t.kind().element_size(), 2);
        assert_eq!(t.kind().name(), "short");
    }

    #[test]
    fn test_transposed_view_compacts() {
        // 2x3 row-major buffer [[1,2,3],[4,5,6]] viewed as its 3x2 transpose.
        let buf = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view =
            Tensor::with_strides(TensorData::Double(buf), vec![3, 2], vec![1, 3]).unwrap();
        assert!(!view.is_contiguous());

        let compact = view.to_contiguous();
        assert!(compact.is_contiguous());
        assert_eq!(compact.dims(), &[3, 2]);
        assert_eq!(
            compact.data(),
            &TensorData::Double(vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0])
        );
    }

    #[test]
    fn test_with_strides_rejects_out_of_bounds() {
        let err = Tensor::with_strides(TensorData::Byte(vec![0; 4]), vec![2, 2], vec![3, 1]);
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_empty_tensor() {
        let t = Tensor::from_data(TensorData::Double(vec![]), vec![0, 3]).unwrap();
        assert_eq!(t.element_count(), 0);
        assert!(t.is_contiguous());
        assert_eq!(t.to_contiguous().element_count(), 0);
    }
}
