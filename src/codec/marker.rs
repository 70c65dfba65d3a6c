//! LDB tag byte constants.

// Container tags, written as the first byte of every container.
pub const UNKNOWN: u8 = 0x00;
pub const FIELD: u8 = 0x01;
pub const ARRAY: u8 = 0x02;
pub const STRING: u8 = 0x03;
pub const OBJECT: u8 = 0x04;

// Primitive type tags. 0x00 is reserved and never written.
pub const BYTE: u8 = 0x01;
pub const SHORT: u8 = 0x02;
pub const CHAR: u8 = 0x03;
pub const INTEGER: u8 = 0x04;
pub const LONG: u8 = 0x05;
pub const FLOAT: u8 = 0x06;
pub const DOUBLE: u8 = 0x07;
pub const BOOLEAN: u8 = 0x08;

// Boolean payload bytes.
pub const FALSE: u8 = 0x00;
pub const TRUE: u8 = 0x01;

// Fixed header lengths, excluding the name bytes.
// Field: tag + nameLen + type
pub const FIELD_HEADER_LEN: usize = 1 + 2 + 1;
// Array: tag + nameLen + size + type + count
pub const ARRAY_HEADER_LEN: usize = 1 + 2 + 4 + 1 + 4;
// String: tag + nameLen + size + count
pub const STRING_HEADER_LEN: usize = 1 + 2 + 4 + 4;
// Object: tag + nameLen + size + fieldCount + stringCount + arrayCount
pub const OBJECT_HEADER_LEN: usize = 1 + 2 + 4 + 2 + 2 + 2;
