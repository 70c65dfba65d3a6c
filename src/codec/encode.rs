//! Primitive encoding: values → big-endian bytes at an explicit offset.
//!
//! Every writer takes the destination slice and a start offset and returns the
//! offset just past what it wrote. Writers never grow the buffer; a
//! destination that is too short yields [`LdbError::CapacityExceeded`] and
//! leaves the buffer untouched.

use super::marker;
use super::primitive::Primitive;
use crate::error::LdbError;
use crate::types::Name;

pub(crate) fn ensure_capacity(dest: &[u8], offset: usize, needed: usize) -> Result<(), LdbError> {
    let available = dest.len().saturating_sub(offset);
    if available < needed {
        Err(LdbError::CapacityExceeded {
            offset,
            needed,
            available,
        })
    } else {
        Ok(())
    }
}

pub fn write_u8(dest: &mut [u8], offset: usize, value: u8) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, 1)?;
    dest[offset] = value;
    Ok(offset + 1)
}

pub fn write_i8(dest: &mut [u8], offset: usize, value: i8) -> Result<usize, LdbError> {
    write_u8(dest, offset, value as u8)
}

pub fn write_u16(dest: &mut [u8], offset: usize, value: u16) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, 2)?;
    dest[offset] = (value >> 8) as u8;
    dest[offset + 1] = value as u8;
    Ok(offset + 2)
}

pub fn write_i16(dest: &mut [u8], offset: usize, value: i16) -> Result<usize, LdbError> {
    write_u16(dest, offset, value as u16)
}

pub fn write_u32(dest: &mut [u8], offset: usize, value: u32) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, 4)?;
    dest[offset] = (value >> 24) as u8;
    dest[offset + 1] = (value >> 16) as u8;
    dest[offset + 2] = (value >> 8) as u8;
    dest[offset + 3] = value as u8;
    Ok(offset + 4)
}

pub fn write_i32(dest: &mut [u8], offset: usize, value: i32) -> Result<usize, LdbError> {
    write_u32(dest, offset, value as u32)
}

pub fn write_u64(dest: &mut [u8], offset: usize, value: u64) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, 8)?;
    for (i, byte) in dest[offset..offset + 8].iter_mut().enumerate() {
        *byte = (value >> (56 - 8 * i)) as u8;
    }
    Ok(offset + 8)
}

pub fn write_i64(dest: &mut [u8], offset: usize, value: i64) -> Result<usize, LdbError> {
    write_u64(dest, offset, value as u64)
}

/// Writes the IEEE-754 bit pattern of `value`.
pub fn write_f32(dest: &mut [u8], offset: usize, value: f32) -> Result<usize, LdbError> {
    write_u32(dest, offset, value.to_bits())
}

/// Writes the IEEE-754 bit pattern of `value`.
pub fn write_f64(dest: &mut [u8], offset: usize, value: f64) -> Result<usize, LdbError> {
    write_u64(dest, offset, value.to_bits())
}

pub fn write_bool(dest: &mut [u8], offset: usize, value: bool) -> Result<usize, LdbError> {
    write_u8(dest, offset, if value { marker::TRUE } else { marker::FALSE })
}

pub fn write_raw(dest: &mut [u8], offset: usize, bytes: &[u8]) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, bytes.len())?;
    dest[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(offset + bytes.len())
}

/// Writes every value of `values` back to back, with no per-element tag.
pub fn write_slice<T: Primitive>(
    dest: &mut [u8],
    offset: usize,
    values: &[T],
) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, values.len() * T::TYPE.width())?;
    let mut pos = offset;
    for &value in values {
        pos = value.write(dest, pos)?;
    }
    Ok(pos)
}

/// Writes a container name: 2-byte length, then the raw bytes.
pub fn write_name(dest: &mut [u8], offset: usize, name: &Name) -> Result<usize, LdbError> {
    ensure_capacity(dest, offset, name.encoded_len())?;
    // Name guarantees len <= u16::MAX.
    let pos = write_u16(dest, offset, name.len() as u16)?;
    write_raw(dest, pos, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_int32_big_endian() {
        let mut buf = [0u8; 4];
        let end = write_i32(&mut buf, 0, 0x0102_0304).unwrap();
        assert_eq!(end, 4);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn encode_at_offset() {
        let mut buf = [0xEEu8; 5];
        let end = write_i16(&mut buf, 2, -2).unwrap();
        assert_eq!(end, 4);
        assert_eq!(buf, [0xEE, 0xEE, 0xFF, 0xFE, 0xEE]);
    }

    #[test]
    fn encode_int64() {
        let mut buf = [0u8; 8];
        write_i64(&mut buf, 0, 0x0102_0304_0506_0708).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn encode_floats_as_bit_patterns() {
        let mut buf = [0u8; 12];
        let pos = write_f32(&mut buf, 0, 1.0).unwrap();
        write_f64(&mut buf, pos, -2.0).unwrap();
        assert_eq!(&buf[..4], &[0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(&buf[4..], &[0xC0, 0x00, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn encode_booleans() {
        let mut buf = [0xAAu8; 2];
        let pos = write_bool(&mut buf, 0, true).unwrap();
        write_bool(&mut buf, pos, false).unwrap();
        assert_eq!(buf, [0x01, 0x00]);
    }

    #[test]
    fn encode_name() {
        let mut buf = [0u8; 4];
        let end = write_name(&mut buf, 0, &Name::new("hp").unwrap()).unwrap();
        assert_eq!(end, 4);
        assert_eq!(buf, [0x00, 0x02, b'h', b'p']);
    }

    #[test]
    fn encode_slice() {
        let mut buf = [0u8; 6];
        let end = write_slice(&mut buf, 0, &[1i16, 2, -1]).unwrap();
        assert_eq!(end, 6);
        assert_eq!(buf, [0, 1, 0, 2, 0xFF, 0xFF]);
    }

    #[test]
    fn capacity_exceeded_leaves_buffer_untouched() {
        let mut buf = [0u8; 5];
        match write_u32(&mut buf, 2, 0xFFFF_FFFF) {
            Err(LdbError::CapacityExceeded {
                offset,
                needed,
                available,
            }) => assert_eq!((offset, needed, available), (2, 4, 3)),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert_eq!(buf, [0; 5]);

        assert!(write_slice(&mut buf, 0, &[1i32, 2]).is_err());
        assert_eq!(buf, [0; 5]);
    }

    #[test]
    fn offset_past_end_is_capacity_error() {
        let mut buf = [0u8; 2];
        assert!(matches!(
            write_u8(&mut buf, 9, 1),
            Err(LdbError::CapacityExceeded { available: 0, .. })
        ));
    }
}
