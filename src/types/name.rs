//! Container names.

use std::fmt;

use bytes::Bytes;

use crate::error::LdbError;

/// The identifier attached to every container.
///
/// Stored on the wire as a 2-byte big-endian length followed by the raw
/// bytes. Names built from Rust strings are UTF-8; names read back from a
/// buffer are kept as-is even when they are not valid UTF-8.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(Bytes);

impl Name {
    /// Longest name the 2-byte length prefix can describe.
    pub const MAX_LEN: usize = u16::MAX as usize;

    pub fn new(name: impl AsRef<str>) -> Result<Self, LdbError> {
        Self::from_bytes(Bytes::copy_from_slice(name.as_ref().as_bytes()))
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Result<Self, LdbError> {
        let bytes = bytes.into();
        if bytes.len() > Self::MAX_LEN {
            return Err(LdbError::NameTooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the name as text if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Bytes this name occupies on the wire, length prefix included.
    pub fn encoded_len(&self) -> usize {
        2 + self.0.len()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl TryFrom<&str> for Name {
    type Error = LdbError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for Name {
    type Error = LdbError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_bytes(name.into_bytes())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", String::from_utf8_lossy(&self.0))
    }
}
