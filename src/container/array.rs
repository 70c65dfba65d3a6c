//! Named homogeneous arrays.

use super::{check_size, read_header, size_field, write_header, Container};
use crate::codec::{decode, encode, marker, ContainerKind, Primitive};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::{ArrayData, Name, TypeTag};

/// A named, counted sequence of values of one primitive kind.
///
/// Layout: `TAG(1) · nameLen(2) · name · size(4) · type(1) · count(4) ·
/// elements(count × width(type))`. Elements carry no per-element tag.
///
/// The declared size is always `12 + nameLen + count × width`, whatever the
/// element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    name: Name,
    data: ArrayData,
}

impl Array {
    pub fn new<T: Primitive>(name: impl AsRef<str>, values: Vec<T>) -> Result<Self, LdbError> {
        Self::from_data(Name::new(name)?, T::into_array_data(values))
    }

    /// Builds an array, checking that its size fits the 4-byte size field.
    pub fn from_data(name: Name, data: ArrayData) -> Result<Self, LdbError> {
        let array = Self { name, data };
        size_field("array", array.encoded_len())?;
        Ok(array)
    }

    pub fn bytes(name: impl AsRef<str>, values: Vec<i8>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn shorts(name: impl AsRef<str>, values: Vec<i16>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn chars(name: impl AsRef<str>, values: Vec<u16>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn integers(name: impl AsRef<str>, values: Vec<i32>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn longs(name: impl AsRef<str>, values: Vec<i64>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn floats(name: impl AsRef<str>, values: Vec<f32>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn doubles(name: impl AsRef<str>, values: Vec<f64>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn booleans(name: impl AsRef<str>, values: Vec<bool>) -> Result<Self, LdbError> {
        Self::new(name, values)
    }

    pub fn type_tag(&self) -> TypeTag {
        self.data.type_tag()
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn into_data(self) -> ArrayData {
        self.data
    }

    /// Returns the elements if the array holds kind `T`.
    pub fn values<T: Primitive>(&self) -> Option<&[T]> {
        T::slice_of(&self.data)
    }

    /// The declared size written to the wire.
    pub fn size(&self) -> u32 {
        // Bounded at construction.
        self.encoded_len() as u32
    }
}

impl Container for Array {
    const KIND: ContainerKind = ContainerKind::Array;

    fn name(&self) -> &Name {
        &self.name
    }

    fn encoded_len(&self) -> usize {
        marker::ARRAY_HEADER_LEN + self.name.len() + self.data.data_len()
    }

    fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::ensure_capacity(dest, offset, self.encoded_len())?;
        let pos = write_header(dest, offset, Self::KIND, &self.name)?;
        let pos = encode::write_u32(dest, pos, self.size())?;
        let pos = encode::write_u8(dest, pos, self.type_tag().to_u8())?;
        let pos = encode::write_u32(dest, pos, self.len() as u32)?;
        write_data(dest, pos, &self.data)
    }

    fn decode(src: &[u8], offset: usize, opts: &DecodeOptions) -> Result<(Self, usize), LdbError> {
        let (name, pos) = read_header(src, offset, Self::KIND)?;
        let declared = decode::read_u32(src, pos)?;
        let type_tag = TypeTag::from_u8(decode::read_u8(src, pos + 4)?)?;
        let count = decode::read_u32(src, pos + 5)? as usize;
        let pos = pos + 9;

        if opts.is_legacy() && type_tag != TypeTag::Byte {
            tracing::warn!(%name, %type_tag, count, "legacy decoding cannot read non-byte array");
            return Err(LdbError::LegacyUnsupported(type_tag));
        }

        let data = read_data(src, pos, type_tag, count)?;
        let end = pos + data.data_len();
        check_size(opts, &name, declared, end - offset)?;
        Ok((Self { name, data }, end))
    }
}

fn write_data(dest: &mut [u8], offset: usize, data: &ArrayData) -> Result<usize, LdbError> {
    match data {
        ArrayData::Byte(v) => encode::write_slice(dest, offset, v),
        ArrayData::Short(v) => encode::write_slice(dest, offset, v),
        ArrayData::Char(v) => encode::write_slice(dest, offset, v),
        ArrayData::Integer(v) => encode::write_slice(dest, offset, v),
        ArrayData::Long(v) => encode::write_slice(dest, offset, v),
        ArrayData::Float(v) => encode::write_slice(dest, offset, v),
        ArrayData::Double(v) => encode::write_slice(dest, offset, v),
        ArrayData::Boolean(v) => encode::write_slice(dest, offset, v),
    }
}

fn read_data(
    src: &[u8],
    offset: usize,
    type_tag: TypeTag,
    count: usize,
) -> Result<ArrayData, LdbError> {
    Ok(match type_tag {
        TypeTag::Byte => ArrayData::Byte(decode::read_vec(src, offset, count)?),
        TypeTag::Short => ArrayData::Short(decode::read_vec(src, offset, count)?),
        TypeTag::Char => ArrayData::Char(decode::read_vec(src, offset, count)?),
        TypeTag::Integer => ArrayData::Integer(decode::read_vec(src, offset, count)?),
        TypeTag::Long => ArrayData::Long(decode::read_vec(src, offset, count)?),
        TypeTag::Float => ArrayData::Float(decode::read_vec(src, offset, count)?),
        TypeTag::Double => ArrayData::Double(decode::read_vec(src, offset, count)?),
        TypeTag::Boolean => ArrayData::Boolean(decode::read_vec(src, offset, count)?),
    })
}
