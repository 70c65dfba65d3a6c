//! Named UTF-16 strings.

use super::{check_size, read_header, size_field, write_header, Container};
use crate::codec::{decode, encode, marker, ContainerKind};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::Name;

/// A named sequence of UTF-16 code units.
///
/// Layout: `TAG(1) · nameLen(2) · name · size(4) · count(4) · units(count × 2)`.
/// The count is in code units, not bytes or characters; a character outside
/// the basic multilingual plane takes two. Units are stored as given, without
/// surrogate validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    name: Name,
    units: Vec<u16>,
}

impl StringValue {
    pub fn new(name: impl AsRef<str>, text: &str) -> Result<Self, LdbError> {
        Self::from_code_units(Name::new(name)?, text.encode_utf16().collect())
    }

    pub fn from_code_units(name: Name, units: Vec<u16>) -> Result<Self, LdbError> {
        let string = Self { name, units };
        size_field("string", string.encoded_len())?;
        Ok(string)
    }

    /// Number of UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn code_units(&self) -> &[u16] {
        &self.units
    }

    /// Decodes the code units, replacing unpaired surrogates with U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Decodes the code units, or `None` if they are not valid UTF-16.
    pub fn try_text(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }

    /// The declared size written to the wire.
    pub fn size(&self) -> u32 {
        // Bounded at construction.
        self.encoded_len() as u32
    }
}

impl Container for StringValue {
    const KIND: ContainerKind = ContainerKind::String;

    fn name(&self) -> &Name {
        &self.name
    }

    fn encoded_len(&self) -> usize {
        marker::STRING_HEADER_LEN + self.name.len() + self.units.len() * 2
    }

    fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::ensure_capacity(dest, offset, self.encoded_len())?;
        let pos = write_header(dest, offset, Self::KIND, &self.name)?;
        let pos = encode::write_u32(dest, pos, self.size())?;
        let pos = encode::write_u32(dest, pos, self.units.len() as u32)?;
        encode::write_slice(dest, pos, &self.units)
    }

    fn decode(src: &[u8], offset: usize, opts: &DecodeOptions) -> Result<(Self, usize), LdbError> {
        let (name, pos) = read_header(src, offset, Self::KIND)?;
        let declared = decode::read_u32(src, pos)?;
        let count = decode::read_u32(src, pos + 4)? as usize;
        let pos = pos + 8;
        let units: Vec<u16> = decode::read_vec(src, pos, count)?;
        let end = pos + count * 2;
        check_size(opts, &name, declared, end - offset)?;
        Ok((Self { name, units }, end))
    }
}
