//! Writes databases to an async byte stream.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::container::Database;
use crate::error::LdbError;

/// Writes LDB databases to an `AsyncWrite` stream.
pub struct DatabaseWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> DatabaseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encodes the whole database into one buffer and writes it.
    pub async fn write_database(&mut self, db: &Database) -> Result<(), LdbError> {
        let bytes = db.to_bytes()?;
        self.writer.write_all(&bytes).await?;
        tracing::debug!(name = %db.name(), size = bytes.len(), "wrote database");
        Ok(())
    }

    /// Flushes the underlying writer.
    pub async fn flush(&mut self) -> Result<(), LdbError> {
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
