//! The LDB primitive codec.
//!
//! LDB stores every multi-byte value big-endian, written and read by explicit
//! shifting so the host byte order never matters. Containers are built on
//! top of these helpers in [`crate::container`].

pub mod decode;
pub mod encode;
pub mod marker;
pub mod primitive;
pub mod skip;

use std::fmt;

pub use primitive::Primitive;
pub use skip::{peek_kind, skip};

/// The kind of container a tag byte announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Field,
    Array,
    String,
    Object,
}

impl ContainerKind {
    pub const fn tag(self) -> u8 {
        match self {
            Self::Field => marker::FIELD,
            Self::Array => marker::ARRAY,
            Self::String => marker::STRING,
            Self::Object => marker::OBJECT,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            marker::FIELD => Some(Self::Field),
            marker::ARRAY => Some(Self::Array),
            marker::STRING => Some(Self::String),
            marker::OBJECT => Some(Self::Object),
            _ => None,
        }
    }

    /// Fixed header bytes of this container, name bytes excluded.
    pub const fn header_len(self) -> usize {
        match self {
            Self::Field => marker::FIELD_HEADER_LEN,
            Self::Array => marker::ARRAY_HEADER_LEN,
            Self::String => marker::STRING_HEADER_LEN,
            Self::Object => marker::OBJECT_HEADER_LEN,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Field => "field",
            Self::Array => "array",
            Self::String => "string",
            Self::Object => "object",
        })
    }
}
