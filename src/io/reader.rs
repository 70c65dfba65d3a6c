//! Reads databases from an async byte stream.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::codec::decode;
use crate::container::Database;
use crate::error::LdbError;
use crate::options::DecodeOptions;
use crate::version::{self, PREAMBLE_LEN};

/// Default ceiling on a database's declared size (64 MiB).
pub const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;

/// Reads whole LDB databases from an `AsyncRead` stream.
///
/// The declared size in the header tells the reader how many bytes belong to
/// the database, so several databases can sit back to back in one stream.
pub struct DatabaseReader<R> {
    reader: R,
    options: DecodeOptions,
    max_size: usize,
}

impl<R: AsyncRead + Unpin> DatabaseReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            options: DecodeOptions::default(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Sets the decode options used for every database read.
    pub fn options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the largest declared size the reader will buffer.
    pub fn max_size(mut self, limit: usize) -> Self {
        self.max_size = limit;
        self
    }

    /// Reads the next database: preamble, name and size first, then the rest.
    pub async fn read_database(&mut self) -> Result<Database, LdbError> {
        // Preamble + name length.
        let mut buf = BytesMut::zeroed(PREAMBLE_LEN + 2);
        self.reader.read_exact(&mut buf).await?;
        version::read_preamble(&buf, 0)?;
        let name_len = usize::from(decode::read_u16(&buf, PREAMBLE_LEN)?);

        // Name + size + object count.
        let fixed = PREAMBLE_LEN + 2 + name_len + 4 + 2;
        buf.resize(fixed, 0);
        self.reader.read_exact(&mut buf[PREAMBLE_LEN + 2..]).await?;
        let size = decode::read_u32(&buf, fixed - 6)? as usize;

        if size > self.max_size {
            tracing::debug!(size, max = self.max_size, "database too large");
            return Err(LdbError::too_large("database", size, self.max_size));
        }
        if size < fixed {
            let name = String::from_utf8_lossy(&buf[PREAMBLE_LEN + 2..fixed - 6]).into_owned();
            return Err(LdbError::InconsistentSize {
                name,
                declared: size,
                actual: fixed,
            });
        }

        buf.resize(size, 0);
        self.reader.read_exact(&mut buf[fixed..]).await?;

        let (db, _) = Database::decode(&buf, 0, &self.options)?;
        Ok(db)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
