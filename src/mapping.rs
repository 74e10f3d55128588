//! Conversion rules between the two value models.
//!
//! This module documents the exact mapping the converters implement; it
//! exports nothing.
//!
//! # Load direction (container → scripting)
//!
//! | container class | scripting value |
//! |-----------------|-----------------|
//! | double | double tensor |
//! | single | float tensor |
//! | int32 | int tensor |
//! | uint32 | int tensor (bit-for-bit narrowing) |
//! | int16 | short tensor |
//! | uint16 | short tensor (bit-for-bit narrowing) |
//! | int8 | char tensor |
//! | uint8 | byte tensor |
//! | logical | byte tensor |
//! | char | string |
//! | cell | table with `Length` and 1-based integer keys |
//! | struct | table keyed by field name |
//! | int64, uint64, function | the string `"unsupported type: <class>"` |
//! | anything else | the string `"unknown type"` |
//!
//! The narrowings are deliberate and lossy in declared type only; the
//! stored bit patterns are preserved exactly.
//!
//! # Save direction (scripting → container)
//!
//! | scripting value | container value |
//! |-----------------|-----------------|
//! | nil | 1-element int32 holding 0 |
//! | boolean | 1-element int8 holding 1 or 0 |
//! | number | 1-element double |
//! | string | 1×n char |
//! | double tensor | double array |
//! | float tensor | single array |
//! | table | 1×1 struct (array-like keys collected into a cell field `array`) |
//! | anything else | unsupported: dropped with a warning |
//!
//! # Axis order
//!
//! The container format stores dimensions with its first axis varying
//! fastest; tensors store them with the last axis varying fastest. Both
//! directions therefore reverse the dimension sequence and copy the
//! buffer unchanged: a container value of dimensions `[c, b, a]` loads as
//! a tensor of shape `[a, b, c]`, and saving that tensor reproduces
//! dimensions `[c, b, a]`. Tensors with irregular strides are compacted
//! to the canonical row-major layout before the copy.
//!
//! # Struct and cell presentation
//!
//! Struct fields with `E` elements present as: the string `"NULL"` when
//! `E < 1`; the decoded element when `E == 1`; a nested table with
//! `Length = E` and 1-based integer keys when `E > 1`. Cells always
//! present the `E > 1` form, flattened to one logical dimension whatever
//! their stored rank. Absent slots decode to `"NULL"`.
