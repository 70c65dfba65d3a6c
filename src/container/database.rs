//! The root envelope holding a collection of objects.

use bytes::Bytes;

use super::{check_size, child_vec, decode_exact, encode_exact, size_field, Container, ObjectValue};
use crate::codec::{self, decode, encode, marker, ContainerKind};
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::types::Name;
use crate::version::{self, FORMAT_VERSION, PREAMBLE_LEN};

/// Fixed header bytes: magic + version + nameLen + size + objectCount.
pub(crate) const DATABASE_HEADER_LEN: usize = PREAMBLE_LEN + 2 + 4 + 2;

const MAX_OBJECTS: usize = u16::MAX as usize;

/// A named, versioned collection of objects.
///
/// Layout: `magic "LDB"(3) · version(2) · nameLen(2) · name · size(4) ·
/// objectCount(2) · objects`. The size covers the whole database, magic
/// included, so a reader can fetch it from a stream in one go. Each object
/// carries its own size and can be skipped without decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    name: Name,
    size: u32,
    objects: Vec<ObjectValue>,
}

impl Database {
    pub fn new(name: impl AsRef<str>) -> Result<Self, LdbError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        let size = (DATABASE_HEADER_LEN + name.len()) as u32;
        Self {
            name,
            size,
            objects: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn attach_object(&mut self, object: ObjectValue) -> Result<(), LdbError> {
        if self.objects.len() >= MAX_OBJECTS {
            return Err(LdbError::too_large(
                "object list",
                self.objects.len() + 1,
                MAX_OBJECTS,
            ));
        }
        self.size = size_field("database", self.encoded_len() + object.encoded_len())?;
        self.objects.push(object);
        Ok(())
    }

    /// Returns the first object with the given name.
    pub fn find_object(&self, name: &str) -> Option<&ObjectValue> {
        self.objects.iter().find(|o| o.name() == name)
    }

    pub fn objects(&self) -> &[ObjectValue] {
        &self.objects
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn encoded_len(&self) -> usize {
        DATABASE_HEADER_LEN
            + self.name.len()
            + self.objects.iter().map(ObjectValue::encoded_len).sum::<usize>()
    }

    pub fn encode(&self, dest: &mut [u8], offset: usize) -> Result<usize, LdbError> {
        encode::ensure_capacity(dest, offset, self.encoded_len())?;
        let pos = version::write_preamble(dest, offset, FORMAT_VERSION)?;
        let pos = encode::write_name(dest, pos, &self.name)?;
        let pos = encode::write_u32(dest, pos, self.size)?;
        let mut pos = encode::write_u16(dest, pos, self.objects.len() as u16)?;
        for object in &self.objects {
            pos = object.encode(dest, pos)?;
        }
        Ok(pos)
    }

    pub fn decode(
        src: &[u8],
        offset: usize,
        opts: &DecodeOptions,
    ) -> Result<(Self, usize), LdbError> {
        version::read_preamble(src, offset)?;
        let (name, pos) = decode::read_name(src, offset + PREAMBLE_LEN)?;
        let size = decode::read_u32(src, pos)?;
        let count = usize::from(decode::read_u16(src, pos + 4)?);
        let mut pos = pos + 6;

        let mut objects = child_vec(count, src, pos, marker::OBJECT_HEADER_LEN);
        for _ in 0..count {
            let (object, next) = ObjectValue::decode(src, pos, opts)?;
            objects.push(object);
            pos = next;
        }

        check_size(opts, &name, size, pos - offset)?;
        tracing::debug!(%name, size, objects = count, "decoded database");
        Ok((
            Self {
                name,
                size,
                objects,
            },
            pos,
        ))
    }

    pub fn to_bytes(&self) -> Result<Bytes, LdbError> {
        encode_exact(self.encoded_len(), |buf| self.encode(buf, 0))
    }

    /// Strictly decodes a buffer that holds exactly one database.
    pub fn from_bytes(src: &[u8]) -> Result<Self, LdbError> {
        decode_exact(src, Self::decode)
    }

    /// Lists each object's name and start offset without decoding any of
    /// them, stepping from one object to the next by its declared size.
    pub fn scan(src: &[u8]) -> Result<Vec<(Name, usize)>, LdbError> {
        version::read_preamble(src, 0)?;
        let (_, pos) = decode::read_name(src, PREAMBLE_LEN)?;
        let count = usize::from(decode::read_u16(src, pos + 4)?);
        let mut pos = pos + 6;

        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let (kind, next) = codec::skip(src, pos)?;
            if kind != ContainerKind::Object {
                return Err(LdbError::MalformedHeader {
                    offset: pos,
                    expected: ContainerKind::Object,
                    found: kind.tag(),
                });
            }
            let (name, _) = decode::read_name(src, pos + 1)?;
            entries.push((name, pos));
            pos = next;
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Array, Field, StringValue};

    fn scene() -> Database {
        let mut db = Database::new("scene").unwrap();

        let mut player = ObjectValue::new("player").unwrap();
        player.attach_field(Field::integer("hp", 42).unwrap()).unwrap();
        player
            .attach_array(Array::floats("pos", vec![1.0, 2.0, 3.0]).unwrap())
            .unwrap();
        db.attach_object(player).unwrap();

        let mut texture = ObjectValue::new("texture").unwrap();
        texture.attach_string(StringValue::new("path", "grass.png").unwrap()).unwrap();
        texture.attach_field(Field::short("width", 256).unwrap()).unwrap();
        db.attach_object(texture).unwrap();

        db
    }

    #[test]
    fn header_layout() {
        let db = Database::new("db").unwrap();
        let bytes = db.to_bytes().unwrap();
        assert_eq!(
            &bytes[..],
            &[b'L', b'D', b'B', 0x01, 0x00, 0x00, 0x02, b'd', b'b', 0, 0, 0, 15, 0, 0]
        );
        assert_eq!(db.size(), 15);
    }

    #[test]
    fn round_trip_scene() {
        let db = scene();
        let bytes = db.to_bytes().unwrap();
        assert_eq!(bytes.len(), db.size() as usize);

        let decoded = Database::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, db);
        let texture = decoded.find_object("texture").unwrap();
        assert_eq!(texture.find_string("path").unwrap().text(), "grass.png");
        assert!(decoded.find_object("missing").is_none());
    }

    #[test]
    fn scan_reports_object_offsets() {
        let db = scene();
        let bytes = db.to_bytes().unwrap();
        let entries = Database::scan(&bytes).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "player");
        assert_eq!(entries[1].0, "texture");

        let first = DATABASE_HEADER_LEN + 5;
        assert_eq!(entries[0].1, first);
        assert_eq!(entries[1].1, first + db.objects()[0].encoded_len());

        let opts = DecodeOptions::default();
        let (texture, _) = ObjectValue::decode(&bytes, entries[1].1, &opts).unwrap();
        assert_eq!(&texture, db.find_object("texture").unwrap());
    }

    #[test]
    fn scan_rejects_non_object_entry() {
        let mut db = Database::new("d").unwrap();
        db.attach_object(ObjectValue::new("o").unwrap()).unwrap();
        let mut bytes = db.to_bytes().unwrap().to_vec();
        let first = DATABASE_HEADER_LEN + 1;
        bytes[first] = marker::STRING;
        assert!(matches!(
            Database::scan(&bytes),
            Err(LdbError::MalformedHeader {
                expected: ContainerKind::Object,
                found: marker::STRING,
                ..
            })
        ));
    }

    #[test]
    fn legacy_mode_surfaces_array_defect() {
        let bytes = scene().to_bytes().unwrap();
        assert!(matches!(
            Database::decode(&bytes, 0, &DecodeOptions::legacy()),
            Err(LdbError::LegacyUnsupported(_))
        ));
    }

    #[test]
    fn attaching_after_unverified_decode_resyncs_size() {
        let mut bytes = scene().to_bytes().unwrap().to_vec();
        // magic + version + nameLen + "scene" puts the size at 12..16.
        bytes[15] ^= 0x01;
        let opts = DecodeOptions::strict().verify_sizes(false);
        let (mut db, _) = Database::decode(&bytes, 0, &opts).unwrap();
        assert_ne!(db.size() as usize, db.encoded_len());

        db.attach_object(ObjectValue::new("extra").unwrap()).unwrap();
        assert_eq!(db.size() as usize, db.encoded_len());
        let reread = Database::from_bytes(&db.to_bytes().unwrap()).unwrap();
        assert_eq!(reread.objects().len(), 3);
        assert_eq!(reread, db);
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut bytes = Database::new("db").unwrap().to_bytes().unwrap().to_vec();
        bytes.push(0);
        assert!(matches!(
            Database::from_bytes(&bytes),
            Err(LdbError::TrailingBytes(1))
        ));
    }

    #[test]
    fn rejects_foreign_data() {
        assert!(matches!(
            Database::from_bytes(b"RIFF\x00\x00\x00\x00"),
            Err(LdbError::BadMagic(_))
        ));
    }
}
