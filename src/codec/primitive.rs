//! Binding between Rust scalar types and LDB primitive kinds.

use super::{decode, encode};
use crate::error::LdbError;
use crate::types::{ArrayData, Scalar, TypeTag};

/// A Rust type that maps onto exactly one LDB primitive kind.
///
/// Implemented for `i8`, `i16`, `u16` (CHAR), `i32`, `i64`, `f32`, `f64` and
/// `bool`. Lets fields and arrays be built and read generically.
pub trait Primitive: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    const TYPE: TypeTag;

    /// Writes `self` big-endian at `offset`, returning the new offset.
    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError>;

    /// Reads one value at `offset`.
    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError>;

    fn into_scalar(self) -> Scalar;

    fn from_scalar(scalar: &Scalar) -> Option<Self>;

    fn into_array_data(values: Vec<Self>) -> ArrayData;

    fn slice_of(data: &ArrayData) -> Option<&[Self]>;
}

impl Primitive for i8 {
    const TYPE: TypeTag = TypeTag::Byte;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_i8(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_i8(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Byte(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Byte(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Byte(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Byte(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i16 {
    const TYPE: TypeTag = TypeTag::Short;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_i16(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_i16(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Short(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Short(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Short(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Short(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for u16 {
    const TYPE: TypeTag = TypeTag::Char;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_u16(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_u16(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Char(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Char(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Char(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Char(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i32 {
    const TYPE: TypeTag = TypeTag::Integer;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_i32(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_i32(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Integer(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Integer(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Integer(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for i64 {
    const TYPE: TypeTag = TypeTag::Long;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_i64(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_i64(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Long(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Long(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Long(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Long(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for f32 {
    const TYPE: TypeTag = TypeTag::Float;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_f32(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_f32(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Float(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Float(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Float(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for f64 {
    const TYPE: TypeTag = TypeTag::Double;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_f64(dest, offset, self)
    }

    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_f64(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Double(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Double(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Double(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl Primitive for bool {
    const TYPE: TypeTag = TypeTag::Boolean;

    fn write(self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::write_bool(dest, offset, self)
    }

    /// Strict: only `0` and `1` are accepted.
    fn read(src: &[u8], offset: usize) -> Result<Self, LdbError> {
        decode::read_bool(src, offset)
    }

    fn into_scalar(self) -> Scalar {
        Scalar::Boolean(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match *scalar {
            Scalar::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn into_array_data(values: Vec<Self>) -> ArrayData {
        ArrayData::Boolean(values)
    }

    fn slice_of(data: &ArrayData) -> Option<&[Self]> {
        match data {
            ArrayData::Boolean(v) => Some(v),
            _ => None,
        }
    }
}
