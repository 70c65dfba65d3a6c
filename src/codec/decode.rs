//! Primitive decoding: big-endian bytes at an explicit offset → values.
//!
//! Readers take the source slice and an offset and return the value found
//! there. The caller advances its cursor by the kind's width.

use super::marker;
use super::primitive::Primitive;
use crate::error::LdbError;
use crate::types::Name;

pub(crate) fn ensure_remaining(src: &[u8], offset: usize, needed: usize) -> Result<(), LdbError> {
    let available = src.len().saturating_sub(offset);
    if available < needed {
        Err(LdbError::TruncatedInput {
            offset,
            needed,
            available,
        })
    } else {
        Ok(())
    }
}

pub fn read_u8(src: &[u8], offset: usize) -> Result<u8, LdbError> {
    ensure_remaining(src, offset, 1)?;
    Ok(src[offset])
}

pub fn read_i8(src: &[u8], offset: usize) -> Result<i8, LdbError> {
    Ok(read_u8(src, offset)? as i8)
}

pub fn read_u16(src: &[u8], offset: usize) -> Result<u16, LdbError> {
    ensure_remaining(src, offset, 2)?;
    Ok((u16::from(src[offset]) << 8) | u16::from(src[offset + 1]))
}

pub fn read_i16(src: &[u8], offset: usize) -> Result<i16, LdbError> {
    Ok(read_u16(src, offset)? as i16)
}

pub fn read_u32(src: &[u8], offset: usize) -> Result<u32, LdbError> {
    ensure_remaining(src, offset, 4)?;
    Ok((u32::from(src[offset]) << 24)
        | (u32::from(src[offset + 1]) << 16)
        | (u32::from(src[offset + 2]) << 8)
        | u32::from(src[offset + 3]))
}

pub fn read_i32(src: &[u8], offset: usize) -> Result<i32, LdbError> {
    Ok(read_u32(src, offset)? as i32)
}

pub fn read_u64(src: &[u8], offset: usize) -> Result<u64, LdbError> {
    ensure_remaining(src, offset, 8)?;
    Ok(src[offset..offset + 8]
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)))
}

pub fn read_i64(src: &[u8], offset: usize) -> Result<i64, LdbError> {
    Ok(read_u64(src, offset)? as i64)
}

pub fn read_f32(src: &[u8], offset: usize) -> Result<f32, LdbError> {
    Ok(f32::from_bits(read_u32(src, offset)?))
}

pub fn read_f64(src: &[u8], offset: usize) -> Result<f64, LdbError> {
    Ok(f64::from_bits(read_u64(src, offset)?))
}

/// Reads a boolean, rejecting any byte other than `0` or `1`.
pub fn read_bool(src: &[u8], offset: usize) -> Result<bool, LdbError> {
    match read_u8(src, offset)? {
        marker::FALSE => Ok(false),
        marker::TRUE => Ok(true),
        other => Err(LdbError::InvalidBoolean(other)),
    }
}

/// Reads a boolean the way legacy readers did: any non-zero byte is `true`.
pub fn read_bool_lenient(src: &[u8], offset: usize) -> Result<bool, LdbError> {
    Ok(read_u8(src, offset)? != marker::FALSE)
}

pub fn read_raw(src: &[u8], offset: usize, len: usize) -> Result<&[u8], LdbError> {
    ensure_remaining(src, offset, len)?;
    Ok(&src[offset..offset + len])
}

/// Reads `count` back-to-back values of one kind.
pub fn read_vec<T: Primitive>(src: &[u8], offset: usize, count: usize) -> Result<Vec<T>, LdbError> {
    let width = T::TYPE.width();
    let needed = count
        .checked_mul(width)
        .ok_or_else(|| LdbError::TruncatedInput {
            offset,
            needed: usize::MAX,
            available: src.len().saturating_sub(offset),
        })?;
    ensure_remaining(src, offset, needed)?;
    (0..count).map(|i| T::read(src, offset + i * width)).collect()
}

/// Reads a container name and returns it with the offset just past it.
pub fn read_name(src: &[u8], offset: usize) -> Result<(Name, usize), LdbError> {
    let len = usize::from(read_u16(src, offset)?);
    let bytes = read_raw(src, offset + 2, len)?;
    let name = Name::from_bytes(bytes.to_vec())?;
    Ok((name, offset + 2 + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    #[test]
    fn decode_int32_big_endian() {
        assert_eq!(read_i32(&[0x01, 0x02, 0x03, 0x04], 0).unwrap(), 0x0102_0304);
        assert_eq!(read_u32(&[0xFF, 0xFF, 0xFF, 0xFE], 0).unwrap(), 0xFFFF_FFFE);
        assert_eq!(read_i32(&[0xFF, 0xFF, 0xFF, 0xFE], 0).unwrap(), -2);
    }

    #[test]
    fn decode_at_offset() {
        let src = [0xEE, 0x12, 0x34];
        assert_eq!(read_u16(&src, 1).unwrap(), 0x1234);
        assert_eq!(read_i8(&src, 0).unwrap(), 0xEEu8 as i8);
    }

    #[test]
    fn decode_extremes() {
        let mut buf = [0u8; 8];
        for value in [i64::MIN, -1, 0, i64::MAX] {
            encode::write_i64(&mut buf, 0, value).unwrap();
            assert_eq!(read_i64(&buf, 0).unwrap(), value);
        }
        for value in [f64::MIN_POSITIVE, -0.0, f64::INFINITY, 1.5e300] {
            encode::write_f64(&mut buf, 0, value).unwrap();
            assert_eq!(read_f64(&buf, 0).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn decode_nan_keeps_bit_pattern() {
        let mut buf = [0u8; 4];
        let nan = f32::from_bits(0x7FC0_0001);
        encode::write_f32(&mut buf, 0, nan).unwrap();
        assert_eq!(read_f32(&buf, 0).unwrap().to_bits(), 0x7FC0_0001);
    }

    #[test]
    fn decode_bool_strict_and_lenient() {
        assert!(!read_bool(&[0x00], 0).unwrap());
        assert!(read_bool(&[0x01], 0).unwrap());
        assert!(matches!(read_bool(&[0x02], 0), Err(LdbError::InvalidBoolean(0x02))));
        assert!(read_bool_lenient(&[0x02], 0).unwrap());
        assert!(!read_bool_lenient(&[0x00], 0).unwrap());
    }

    #[test]
    fn decode_vec() {
        let src = [0x00, 0x48, 0x00, 0x69];
        assert_eq!(read_vec::<u16>(&src, 0, 2).unwrap(), vec![0x48, 0x69]);
        assert!(read_vec::<u16>(&src, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn decode_name() {
        let src = [0x00, 0x02, b'h', b'p', 0xFF];
        let (name, end) = read_name(&src, 0).unwrap();
        assert_eq!(name, "hp");
        assert_eq!(end, 4);
    }

    #[test]
    fn truncated_input() {
        match read_u32(&[0x01, 0x02], 0) {
            Err(LdbError::TruncatedInput {
                offset,
                needed,
                available,
            }) => assert_eq!((offset, needed, available), (0, 4, 2)),
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
        assert!(matches!(
            read_vec::<i64>(&[0u8; 15], 0, 2),
            Err(LdbError::TruncatedInput { needed: 16, .. })
        ));
        assert!(matches!(
            read_name(&[0x00, 0x05, b'a'], 0),
            Err(LdbError::TruncatedInput { needed: 5, available: 1, .. })
        ));
    }
}
