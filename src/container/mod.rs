//! LDB containers: named, self-delimited units of the binary format.
//!
//! - **`Field`** — one named scalar
//! - **`Array`** — a named homogeneous sequence of one primitive kind
//! - **`StringValue`** — a named sequence of UTF-16 code units
//! - **`ObjectValue`** — a flat named aggregate of the three above
//! - **`Database`** — the root envelope holding objects
//!
//! Every container starts with a tag byte and its name. Decoders check the
//! tag but never dispatch on it; the caller says which container it expects.

mod array;
mod database;
mod field;
mod object;
mod string;

pub use array::Array;
pub use database::Database;
pub use field::Field;
pub use object::ObjectValue;
pub use string::StringValue;

use bytes::{Bytes, BytesMut};

use crate::codec::{decode, encode, ContainerKind};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::Name;

/// Encoding and decoding shared by every tagged container.
pub trait Container: Sized {
    const KIND: ContainerKind;

    fn name(&self) -> &Name;

    /// Number of bytes [`encode`](Container::encode) writes.
    fn encoded_len(&self) -> usize;

    /// Writes the container at `offset` and returns the offset just past it.
    ///
    /// Fails with [`LdbError::CapacityExceeded`] before writing anything if
    /// `dest` cannot hold the whole container.
    fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError>;

    /// Reads a container at `offset`, returning it with the offset just past it.
    fn decode(src: &[u8], offset: usize, opts: &DecodeOptions) -> Result<(Self, usize), LdbError>;

    /// Encodes into a freshly allocated buffer of exactly `encoded_len()` bytes.
    fn to_bytes(&self) -> Result<Bytes, LdbError> {
        encode_exact(self.encoded_len(), |buf| self.encode(buf, 0))
    }

    /// Strictly decodes a buffer that holds exactly one container.
    fn from_bytes(src: &[u8]) -> Result<Self, LdbError> {
        decode_exact(src, Self::decode)
    }
}

/// Runs `encode` over a zeroed buffer of `len` bytes and freezes it.
pub(crate) fn encode_exact<F>(len: usize, encode: F) -> Result<Bytes, LdbError>
where
    F: FnOnce(&mut [u8]) -> Result<usize, LdbError>,
{
    let mut buf = BytesMut::zeroed(len);
    encode(&mut buf[..])?;
    Ok(buf.freeze())
}

/// Strictly decodes from offset 0 and rejects anything left over.
pub(crate) fn decode_exact<T, F>(src: &[u8], decode: F) -> Result<T, LdbError>
where
    F: FnOnce(&[u8], usize, &DecodeOptions) -> Result<(T, usize), LdbError>,
{
    let (value, end) = decode(src, 0, &DecodeOptions::strict())?;
    if end != src.len() {
        return Err(LdbError::TrailingBytes(src.len() - end));
    }
    Ok(value)
}

/// Allocates for a child list read from the input, reserving no more
/// entries than the remaining bytes could hold at `min_len` each.
pub(crate) fn child_vec<T>(count: usize, src: &[u8], offset: usize, min_len: usize) -> Vec<T> {
    let fits = src.len().saturating_sub(offset) / min_len;
    Vec::with_capacity(count.min(fits))
}

/// Writes the tag byte and name.
pub(crate) fn write_header(
    dest: &mut [u8],
    offset: usize,
    kind: ContainerKind,
    name: &Name,
) -> Result<usize, LdbError> {
    let pos = encode::write_u8(dest, offset, kind.tag())?;
    encode::write_name(dest, pos, name)
}

/// Checks the tag byte and reads the name.
pub(crate) fn read_header(
    src: &[u8],
    offset: usize,
    kind: ContainerKind,
) -> Result<(Name, usize), LdbError> {
    let found = decode::read_u8(src, offset)?;
    if found != kind.tag() {
        tracing::debug!(offset, expected = %kind, found, "unexpected container tag");
        return Err(LdbError::MalformedHeader {
            offset,
            expected: kind,
            found,
        });
    }
    decode::read_name(src, offset + 1)
}

/// Compares a declared size against the bytes a decoder actually consumed.
pub(crate) fn check_size(
    opts: &DecodeOptions,
    name: &Name,
    declared: u32,
    actual: usize,
) -> Result<(), LdbError> {
    let declared = declared as usize;
    if opts.checks_sizes() && declared != actual {
        tracing::debug!(%name, declared, actual, "declared size mismatch");
        return Err(LdbError::InconsistentSize {
            name: name.to_string(),
            declared,
            actual,
        });
    }
    Ok(())
}

/// Converts an encoded length to the 4-byte size field.
pub(crate) fn size_field(what: &'static str, len: usize) -> Result<u32, LdbError> {
    u32::try_from(len).map_err(|_| LdbError::too_large(what, len, u32::MAX as usize))
}
