//! Root container magic and format versioning.

use crate::codec::{decode, encode};
use crate::error::LdbError;

/// Magic bytes opening every LDB database.
pub const LDB_MAGIC: [u8; 3] = *b"LDB";

/// Format version written by this crate (major 1, minor 0).
pub const FORMAT_VERSION: u16 = 0x0100;

/// Versions this crate can read.
pub const SUPPORTED_VERSIONS: [u16; 1] = [FORMAT_VERSION];

/// Magic plus version.
pub const PREAMBLE_LEN: usize = 5;

pub fn is_supported(version: u16) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}

/// Writes the magic and `version` at `offset`.
pub fn write_preamble(dest: &mut [u8], offset: usize, version: u16) -> Result<usize, LdbError> {
    encode::ensure_capacity(dest, offset, PREAMBLE_LEN)?;
    let pos = encode::write_raw(dest, offset, &LDB_MAGIC)?;
    encode::write_u16(dest, pos, version)
}

/// Checks the magic at `offset` and returns the version that follows it.
pub fn read_preamble(src: &[u8], offset: usize) -> Result<u16, LdbError> {
    let magic = decode::read_raw(src, offset, LDB_MAGIC.len())?;
    if magic != LDB_MAGIC {
        let mut found = [0u8; 3];
        found.copy_from_slice(magic);
        return Err(LdbError::BadMagic(found));
    }
    let version = decode::read_u16(src, offset + LDB_MAGIC.len())?;
    if !is_supported(version) {
        return Err(LdbError::UnsupportedVersion(version));
    }
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_bytes() {
        let mut buf = [0u8; PREAMBLE_LEN];
        let end = write_preamble(&mut buf, 0, FORMAT_VERSION).unwrap();
        assert_eq!(end, PREAMBLE_LEN);
        assert_eq!(buf, [b'L', b'D', b'B', 0x01, 0x00]);
        assert_eq!(read_preamble(&buf, 0).unwrap(), FORMAT_VERSION);
    }

    #[test]
    fn bad_magic() {
        assert!(matches!(
            read_preamble(b"LDX\x01\x00", 0),
            Err(LdbError::BadMagic([b'L', b'D', b'X']))
        ));
    }

    #[test]
    fn unsupported_version() {
        assert!(matches!(
            read_preamble(b"LDB\x02\x00", 0),
            Err(LdbError::UnsupportedVersion(0x0200))
        ));
        assert!(!is_supported(0x0000));
    }

    #[test]
    fn short_preamble() {
        assert!(matches!(
            read_preamble(b"LD", 0),
            Err(LdbError::TruncatedInput { .. })
        ));
    }
}
