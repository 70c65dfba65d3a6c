//! Skip-parsing: stepping over containers without decoding their payload.
//!
//! Arrays, strings and objects carry their total encoded length right after
//! the name, so a reader can jump past them. Fields carry no size; their
//! extent follows from the type tag.

use super::decode::{ensure_remaining, read_raw, read_u16, read_u32, read_u8};
use super::ContainerKind;
use crate::error::LdbError;
use crate::types::TypeTag;

/// Reads the tag byte at `offset` and reports which container starts there.
pub fn peek_kind(src: &[u8], offset: usize) -> Result<ContainerKind, LdbError> {
    let tag = read_u8(src, offset)?;
    ContainerKind::from_tag(tag).ok_or(LdbError::UnknownContainer { offset, found: tag })
}

/// Returns the kind of the container at `offset` and the offset just past it.
///
/// Only the header is inspected. The declared size must at least cover the
/// container's own header and must fit in `src`.
pub fn skip(src: &[u8], offset: usize) -> Result<(ContainerKind, usize), LdbError> {
    let kind = peek_kind(src, offset)?;
    let name_len = usize::from(read_u16(src, offset + 1)?);
    let after_name = offset + 3 + name_len;

    if kind == ContainerKind::Field {
        ensure_remaining(src, offset + 3, name_len)?;
        let type_tag = TypeTag::from_u8(read_u8(src, after_name)?)?;
        let len = kind.header_len() + name_len + type_tag.width();
        ensure_remaining(src, offset, len)?;
        return Ok((kind, offset + len));
    }

    let declared = read_u32(src, after_name)? as usize;
    let minimum = kind.header_len() + name_len;
    if declared < minimum {
        let name = String::from_utf8_lossy(read_raw(src, offset + 3, name_len)?).into_owned();
        tracing::debug!(%kind, %name, declared, minimum, "declared size smaller than header");
        return Err(LdbError::InconsistentSize {
            name,
            declared,
            actual: minimum,
        });
    }
    ensure_remaining(src, offset, declared)?;
    Ok((kind, offset + declared))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::marker;
    use crate::container::{Array, Container, Field, ObjectValue, StringValue};
    use crate::options::DecodeOptions;

    /// Encodes `value` between padding and checks that skipping and decoding
    /// it end on the same offset.
    fn skip_lands_where_decode_ends<C: Container>(value: &C) {
        let bytes = value.to_bytes().unwrap();
        let mut src = vec![0xAA; 3];
        src.extend_from_slice(&bytes);
        src.push(0xEE);

        let (kind, skipped) = skip(&src, 3).unwrap();
        let (_, decoded) = C::decode(&src, 3, &DecodeOptions::default()).unwrap();
        assert_eq!(kind, C::KIND);
        assert_eq!(skipped, decoded);
        assert_eq!(skipped, 3 + bytes.len());
    }

    #[test]
    fn skip_matches_decode_for_every_container_kind() {
        skip_lands_where_decode_ends(&Field::byte("b", -1).unwrap());
        skip_lands_where_decode_ends(&Field::double("d", 0.25).unwrap());
        skip_lands_where_decode_ends(&Field::boolean("flag", true).unwrap());

        skip_lands_where_decode_ends(&Array::shorts("s", vec![1, -2, 3]).unwrap());
        skip_lands_where_decode_ends(&Array::booleans("mask", vec![true, false]).unwrap());
        skip_lands_where_decode_ends(&Array::longs("empty", Vec::new()).unwrap());

        skip_lands_where_decode_ends(&StringValue::new("label", "Hi").unwrap());
        skip_lands_where_decode_ends(&StringValue::new("clef", "\u{1D11E}").unwrap());
        skip_lands_where_decode_ends(&StringValue::new("blank", "").unwrap());

        let mut obj = ObjectValue::new("player").unwrap();
        obj.attach_field(Field::integer("hp", 42).unwrap()).unwrap();
        obj.attach_string(StringValue::new("tag", "p1").unwrap()).unwrap();
        obj.attach_array(Array::floats("pos", vec![1.0, 2.0, 3.0]).unwrap())
            .unwrap();
        skip_lands_where_decode_ends(&obj);
        skip_lands_where_decode_ends(&ObjectValue::new("empty").unwrap());
    }

    #[test]
    fn skip_field_uses_type_width() {
        let src = [
            marker::FIELD,
            0x00,
            0x01,
            b'x',
            marker::LONG,
            0,
            0,
            0,
            0,
            0,
            0,
            0,
            7,
            0xEE,
        ];
        assert_eq!(skip(&src, 0).unwrap(), (ContainerKind::Field, 13));
    }

    #[test]
    fn skip_array_uses_declared_size() {
        // Declared size 16 covers the 12-byte header, the name and 3 payload bytes.
        let src = [
            marker::ARRAY,
            0x00,
            0x01,
            b'a',
            0x00,
            0x00,
            0x00,
            0x10,
            marker::BYTE,
            0x00,
            0x00,
            0x00,
            0x03,
            1,
            2,
            3,
        ];
        assert_eq!(skip(&src, 0).unwrap(), (ContainerKind::Array, 16));
    }

    #[test]
    fn unknown_container_tag() {
        assert!(matches!(
            peek_kind(&[0x09], 0),
            Err(LdbError::UnknownContainer { offset: 0, found: 0x09 })
        ));
        assert!(matches!(
            peek_kind(&[marker::UNKNOWN], 0),
            Err(LdbError::UnknownContainer { .. })
        ));
    }

    #[test]
    fn declared_size_below_header_rejected() {
        let src = [marker::STRING, 0x00, 0x01, b's', 0x00, 0x00, 0x00, 0x02, 0, 0, 0, 0];
        match skip(&src, 0) {
            Err(LdbError::InconsistentSize {
                name,
                declared,
                actual,
            }) => {
                assert_eq!(name, "s");
                assert_eq!(declared, 2);
                assert_eq!(actual, 12);
            }
            other => panic!("expected InconsistentSize, got {other:?}"),
        }
    }

    #[test]
    fn declared_size_past_end_is_truncated() {
        let src = [marker::OBJECT, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00];
        assert!(matches!(
            skip(&src, 0),
            Err(LdbError::TruncatedInput { needed: 256, .. })
        ));
    }
}
