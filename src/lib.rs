//! LDB — a pure-Rust binary object notation.
//!
//! LDB persists named, flat records of typed data: scalar fields, homogeneous
//! arrays and UTF-16 strings grouped into objects, optionally collected in a
//! versioned database envelope. Everything is big-endian and every sized
//! container carries its own byte length, so readers can skip what they do
//! not need.
//!
//! # Architecture
//!
//! - **`types`** — The primitive registry (`TypeTag`), scalar values and names
//! - **`codec`** — Big-endian primitive encoding/decoding and skip-parsing
//! - **`container`** — `Field`, `Array`, `StringValue`, `ObjectValue`, `Database`
//! - **`options`** — Strict and legacy-compatible decode configuration
//! - **`version`** — Database magic and format version
//! - **`io`** — Async readers/writers for whole databases

pub mod codec;
pub mod container;
pub mod error;
pub mod io;
pub mod options;
pub mod types;
pub mod version;

pub use codec::{ContainerKind, Primitive};
pub use container::{Array, Container, Database, Field, ObjectValue, StringValue};
pub use error::LdbError;
pub use options::{DecodeMode, DecodeOptions};
pub use types::{ArrayData, Name, Scalar, TypeTag};
