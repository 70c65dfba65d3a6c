//! Error types for LDB encoding and decoding.

use crate::codec::ContainerKind;
use crate::types::TypeTag;

/// Errors that can occur while encoding or decoding LDB data.
#[derive(Debug, thiserror::Error)]
pub enum LdbError {
    #[error("malformed header at offset {offset}: expected {expected} tag, found 0x{found:02X}")]
    MalformedHeader {
        offset: usize,
        expected: ContainerKind,
        found: u8,
    },

    #[error("unknown container tag at offset {offset}: 0x{found:02X}")]
    UnknownContainer { offset: usize, found: u8 },

    #[error("unknown type tag: 0x{0:02X}")]
    UnknownType(u8),

    #[error("truncated input: need {needed} bytes at offset {offset} but only {available} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("capacity exceeded: need {needed} bytes at offset {offset} but only {available} remaining")]
    CapacityExceeded {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("inconsistent size for {name}: declared {declared}, actual {actual}")]
    InconsistentSize {
        name: String,
        declared: usize,
        actual: usize,
    },

    #[error("{0} trailing bytes after container")]
    TrailingBytes(usize),

    #[error("invalid boolean byte: 0x{0:02X}")]
    InvalidBoolean(u8),

    #[error("name too long: {0} bytes")]
    NameTooLong(usize),

    #[error("{what} too large: {len} exceeds {max}")]
    TooLarge {
        what: &'static str,
        len: usize,
        max: usize,
    },

    #[error("legacy decoder cannot read {0} arrays")]
    LegacyUnsupported(TypeTag),

    #[error("bad magic: {0:02X?}")]
    BadMagic([u8; 3]),

    #[error("unsupported format version: 0x{0:04X}")]
    UnsupportedVersion(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LdbError {
    pub(crate) fn too_large(what: &'static str, len: usize, max: usize) -> Self {
        Self::TooLarge { what, len, max }
    }

    /// Returns `true` for errors caused by malformed or short input, as opposed
    /// to caller mistakes on the encode side.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::UnknownContainer { .. }
                | Self::UnknownType(_)
                | Self::TruncatedInput { .. }
                | Self::InconsistentSize { .. }
                | Self::TrailingBytes(_)
                | Self::InvalidBoolean(_)
                | Self::LegacyUnsupported(_)
                | Self::BadMagic(_)
                | Self::UnsupportedVersion(_)
        )
    }
}
