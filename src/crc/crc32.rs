//! crc32fast-based checksum implementation.

use std::fmt;

/// Incremental CRC32 state over raw (pre-encoding) bytes.
///
/// The underlying `crc32fast::Hasher` tracks the number of bytes hashed,
/// which is what makes [`Crc32::combine`] equivalent to hashing the
/// concatenated input in one pass.
#[derive(Clone)]
pub(crate) struct Crc32 {
    state: crc32fast::Hasher,
}

impl Crc32 {
    /// Creates a new checksum state. An empty input finalizes to 0.
    pub fn new() -> Self {
        Self {
            state: crc32fast::Hasher::new(),
        }
    }

    /// Feeds more raw bytes into the checksum.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Returns the checksum of everything fed so far.
    pub fn finalize(&self) -> u32 {
        self.state.clone().finalize()
    }

    /// Appends `other` to this checksum, as if `other`'s input had been
    /// fed directly after this one's.
    pub fn combine(&mut self, other: &Crc32) {
        self.state.combine(&other.state);
    }

    /// Convenience method to checksum data in one shot.
    #[allow(dead_code)]
    pub(crate) fn hash(data: &[u8]) -> u32 {
        crc32fast::hash(data)
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Crc32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crc32(0x{:08x})", self.finalize())
    }
}
