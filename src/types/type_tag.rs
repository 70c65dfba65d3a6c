//! The primitive type registry.

use std::fmt;

use crate::codec::marker;
use crate::error::LdbError;

/// One of the eight fixed-width primitive kinds an LDB field or array holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    Byte = marker::BYTE,
    Short = marker::SHORT,
    Char = marker::CHAR,
    Integer = marker::INTEGER,
    Long = marker::LONG,
    Float = marker::FLOAT,
    Double = marker::DOUBLE,
    Boolean = marker::BOOLEAN,
}

impl TypeTag {
    /// Every registered kind, in tag order.
    pub const ALL: [TypeTag; 8] = [
        Self::Byte,
        Self::Short,
        Self::Char,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
    ];

    /// Encoded width of one value of this kind, in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Byte | Self::Boolean => 1,
            Self::Short | Self::Char => 2,
            Self::Integer | Self::Float => 4,
            Self::Long | Self::Double => 8,
        }
    }

    /// The tag byte written on the wire.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a tag byte. `0` is reserved and, like any unregistered byte,
    /// is rejected.
    pub fn from_u8(byte: u8) -> Result<Self, LdbError> {
        match byte {
            marker::BYTE => Ok(Self::Byte),
            marker::SHORT => Ok(Self::Short),
            marker::CHAR => Ok(Self::Char),
            marker::INTEGER => Ok(Self::Integer),
            marker::LONG => Ok(Self::Long),
            marker::FLOAT => Ok(Self::Float),
            marker::DOUBLE => Ok(Self::Double),
            marker::BOOLEAN => Ok(Self::Boolean),
            other => Err(LdbError::UnknownType(other)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
        }
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = LdbError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_u8(byte)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_registry() {
        let widths: Vec<usize> = TypeTag::ALL.iter().map(|t| t.width()).collect();
        assert_eq!(widths, [1, 2, 2, 4, 8, 4, 8, 1]);
    }

    #[test]
    fn tag_bytes_round_trip() {
        for (i, tag) in TypeTag::ALL.iter().enumerate() {
            assert_eq!(tag.to_u8(), i as u8 + 1);
            assert_eq!(TypeTag::from_u8(tag.to_u8()).unwrap(), *tag);
        }
    }

    #[test]
    fn reserved_and_unregistered_tags_rejected() {
        for byte in [0x00, 0x09, 0xFF] {
            match TypeTag::try_from(byte) {
                Err(LdbError::UnknownType(b)) => assert_eq!(b, byte),
                other => panic!("expected UnknownType for 0x{byte:02X}, got {other:?}"),
            }
        }
    }
}
