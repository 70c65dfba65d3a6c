//! Named scalar fields.

use super::{read_header, write_header, Container};
use crate::codec::{decode, encode, marker, ContainerKind, Primitive};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::{Name, Scalar, TypeTag};

/// A single named primitive value.
///
/// Layout: `TAG(1) · nameLen(2) · name · type(1) · value(width(type))`.
/// There is no length prefix; the width follows from the type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: Name,
    value: Scalar,
}

impl Field {
    pub fn new(name: impl AsRef<str>, value: impl Into<Scalar>) -> Result<Self, LdbError> {
        Ok(Self::with_name(Name::new(name)?, value.into()))
    }

    pub fn with_name(name: Name, value: Scalar) -> Self {
        Self { name, value }
    }

    pub fn byte(name: impl AsRef<str>, value: i8) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn short(name: impl AsRef<str>, value: i16) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    /// A CHAR field holds one UTF-16 code unit.
    pub fn char(name: impl AsRef<str>, value: u16) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn integer(name: impl AsRef<str>, value: i32) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn long(name: impl AsRef<str>, value: i64) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn float(name: impl AsRef<str>, value: f32) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn double(name: impl AsRef<str>, value: f64) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn boolean(name: impl AsRef<str>, value: bool) -> Result<Self, LdbError> {
        Self::new(name, value)
    }

    pub fn type_tag(&self) -> TypeTag {
        self.value.type_tag()
    }

    pub fn value(&self) -> Scalar {
        self.value
    }

    /// Returns the value if the field holds kind `T`.
    pub fn get<T: Primitive>(&self) -> Option<T> {
        T::from_scalar(&self.value)
    }
}

impl Container for Field {
    const KIND: ContainerKind = ContainerKind::Field;

    fn name(&self) -> &Name {
        &self.name
    }

    fn encoded_len(&self) -> usize {
        marker::FIELD_HEADER_LEN + self.name.len() + self.type_tag().width()
    }

    fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::ensure_capacity(dest, offset, self.encoded_len())?;
        let pos = write_header(dest, offset, Self::KIND, &self.name)?;
        let pos = encode::write_u8(dest, pos, self.type_tag().to_u8())?;
        write_scalar(dest, pos, self.value)
    }

    fn decode(src: &[u8], offset: usize, opts: &DecodeOptions) -> Result<(Self, usize), LdbError> {
        let (name, pos) = read_header(src, offset, Self::KIND)?;
        let type_tag = TypeTag::from_u8(decode::read_u8(src, pos)?)?;
        let pos = pos + 1;
        let value = read_scalar(src, pos, type_tag, opts)?;
        Ok((Self { name, value }, pos + type_tag.width()))
    }
}

fn write_scalar(dest: &mut [u8], offset: usize, value: Scalar) -> Result<usize, LdbError> {
    match value {
        Scalar::Byte(v) => v.write(dest, offset),
        Scalar::Short(v) => v.write(dest, offset),
        Scalar::Char(v) => v.write(dest, offset),
        Scalar::Integer(v) => v.write(dest, offset),
        Scalar::Long(v) => v.write(dest, offset),
        Scalar::Float(v) => v.write(dest, offset),
        Scalar::Double(v) => v.write(dest, offset),
        Scalar::Boolean(v) => v.write(dest, offset),
    }
}

fn read_scalar(
    src: &[u8],
    offset: usize,
    type_tag: TypeTag,
    opts: &DecodeOptions,
) -> Result<Scalar, LdbError> {
    Ok(match type_tag {
        TypeTag::Byte => Scalar::Byte(decode::read_i8(src, offset)?),
        TypeTag::Short => Scalar::Short(decode::read_i16(src, offset)?),
        TypeTag::Char => Scalar::Char(decode::read_u16(src, offset)?),
        TypeTag::Integer => Scalar::Integer(decode::read_i32(src, offset)?),
        TypeTag::Long => Scalar::Long(decode::read_i64(src, offset)?),
        TypeTag::Float => Scalar::Float(decode::read_f32(src, offset)?),
        TypeTag::Double => Scalar::Double(decode::read_f64(src, offset)?),
        TypeTag::Boolean if opts.is_legacy() => {
            Scalar::Boolean(decode::read_bool_lenient(src, offset)?)
        }
        TypeTag::Boolean => Scalar::Boolean(decode::read_bool(src, offset)?),
    })
}
