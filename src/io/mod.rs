//! Async stream adapters for whole databases.

pub mod reader;
pub mod writer;

pub use reader::DatabaseReader;
pub use writer::DatabaseWriter;
