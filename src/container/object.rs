//! Flat named aggregates.

use super::{
    check_size, child_vec, read_header, size_field, write_header, Array, Container, Field,
    StringValue,
};
use crate::codec::{decode, encode, marker, ContainerKind};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::Name;

/// Longest child list the 2-byte count can describe.
const MAX_CHILDREN: usize = u16::MAX as usize;

/// A named record of fields, strings and arrays.
///
/// Layout: `TAG(1) · nameLen(2) · name · size(4) · fieldCount(2) · fields ·
/// stringCount(2) · strings · arrayCount(2) · arrays`.
///
/// Objects are flat: they never contain other objects. The declared size is
/// kept up to date as children are attached. A decoded object keeps the size
/// it was read with until a child is attached, which recomputes it from the
/// encoded content.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    name: Name,
    size: u32,
    fields: Vec<Field>,
    strings: Vec<StringValue>,
    arrays: Vec<Array>,
}

impl ObjectValue {
    pub fn new(name: impl AsRef<str>) -> Result<Self, LdbError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        // Name length is capped at u16::MAX, so this always fits.
        let size = (marker::OBJECT_HEADER_LEN + name.len()) as u32;
        Self {
            name,
            size,
            fields: Vec::new(),
            strings: Vec::new(),
            arrays: Vec::new(),
        }
    }

    pub fn attach_field(&mut self, field: Field) -> Result<(), LdbError> {
        check_count("field list", self.fields.len())?;
        self.grow(field.encoded_len())?;
        self.fields.push(field);
        Ok(())
    }

    pub fn attach_string(&mut self, string: StringValue) -> Result<(), LdbError> {
        check_count("string list", self.strings.len())?;
        self.grow(string.encoded_len())?;
        self.strings.push(string);
        Ok(())
    }

    pub fn attach_array(&mut self, array: Array) -> Result<(), LdbError> {
        check_count("array list", self.arrays.len())?;
        self.grow(array.encoded_len())?;
        self.arrays.push(array);
        Ok(())
    }

    /// Returns the first field with the given name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn find_string(&self, name: &str) -> Option<&StringValue> {
        self.strings.iter().find(|s| s.name() == name)
    }

    pub fn find_array(&self, name: &str) -> Option<&Array> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn strings(&self) -> &[StringValue] {
        &self.strings
    }

    pub fn arrays(&self) -> &[Array] {
        &self.arrays
    }

    /// The declared size: header plus every attached child.
    pub fn size(&self) -> u32 {
        self.size
    }

    fn grow(&mut self, len: usize) -> Result<(), LdbError> {
        let total = self.encoded_len() + len;
        self.size = size_field("object", total)?;
        Ok(())
    }
}

fn check_count(what: &'static str, current: usize) -> Result<(), LdbError> {
    if current >= MAX_CHILDREN {
        return Err(LdbError::too_large(what, current + 1, MAX_CHILDREN));
    }
    Ok(())
}

impl Container for ObjectValue {
    const KIND: ContainerKind = ContainerKind::Object;

    fn name(&self) -> &Name {
        &self.name
    }

    /// Sum of the bytes actually written, which equals `size()` unless the
    /// object was decoded without size verification.
    fn encoded_len(&self) -> usize {
        marker::OBJECT_HEADER_LEN
            + self.name.len()
            + self.fields.iter().map(Field::encoded_len).sum::<usize>()
            + self.strings.iter().map(StringValue::encoded_len).sum::<usize>()
            + self.arrays.iter().map(Array::encoded_len).sum::<usize>()
    }

    fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::ensure_capacity(dest, offset, self.encoded_len())?;
        let mut pos = write_header(dest, offset, Self::KIND, &self.name)?;
        pos = encode::write_u32(dest, pos, self.size)?;

        pos = encode::write_u16(dest, pos, self.fields.len() as u16)?;
        for field in &self.fields {
            pos = field.encode(dest, pos)?;
        }
        pos = encode::write_u16(dest, pos, self.strings.len() as u16)?;
        for string in &self.strings {
            pos = string.encode(dest, pos)?;
        }
        pos = encode::write_u16(dest, pos, self.arrays.len() as u16)?;
        for array in &self.arrays {
            pos = array.encode(dest, pos)?;
        }

        tracing::trace!(name = %self.name, size = self.size, "encoded object");
        Ok(pos)
    }

    fn decode(src: &[u8], offset: usize, opts: &DecodeOptions) -> Result<(Self, usize), LdbError> {
        let (name, pos) = read_header(src, offset, Self::KIND)?;
        let size = decode::read_u32(src, pos)?;
        let mut pos = pos + 4;

        let field_count = usize::from(decode::read_u16(src, pos)?);
        pos += 2;
        let mut fields = child_vec(field_count, src, pos, marker::FIELD_HEADER_LEN + 1);
        for _ in 0..field_count {
            let (field, next) = Field::decode(src, pos, opts)?;
            fields.push(field);
            pos = next;
        }

        let string_count = usize::from(decode::read_u16(src, pos)?);
        pos += 2;
        let mut strings = child_vec(string_count, src, pos, marker::STRING_HEADER_LEN);
        for _ in 0..string_count {
            let (string, next) = StringValue::decode(src, pos, opts)?;
            strings.push(string);
            pos = next;
        }

        let array_count = usize::from(decode::read_u16(src, pos)?);
        pos += 2;
        let mut arrays = child_vec(array_count, src, pos, marker::ARRAY_HEADER_LEN);
        for _ in 0..array_count {
            let (array, next) = Array::decode(src, pos, opts)?;
            arrays.push(array);
            pos = next;
        }

        check_size(opts, &name, size, pos - offset)?;
        tracing::trace!(
            %name,
            size,
            fields = field_count,
            strings = string_count,
            arrays = array_count,
            "decoded object",
        );
        Ok((
            Self {
                name,
                size,
                fields,
                strings,
                arrays,
            },
            pos,
        ))
    }
}
