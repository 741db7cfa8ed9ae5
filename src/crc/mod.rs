//! CRC32 checksum state for part and whole-file integrity.
//!
//! This module wraps the `crc32fast` implementation used for both the
//! per-part checksum and the running whole-file checksum.
//!
//! - [`Crc32`] - incremental CRC32 over raw bytes, combinable across parts

mod crc32;

pub(crate) use crc32::Crc32;
