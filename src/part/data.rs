//! The Part type - one encoded segment of the source.

use bytes::Bytes;
use std::fmt;

/// One contiguous, independently decodable segment of the encoded output.
///
/// A part covers the raw byte range `start_byte..=end_byte` of the source
/// (1-based, inclusive) and carries the wire-ready encoded bytes for that
/// range. Checksums are always over *raw* bytes: `pcrc32` covers this
/// part's range, and `crc32` - present only on the final part of a run -
/// covers the entire source.
///
/// Parts are assembled in one step by the encoder and never mutated
/// afterwards.
///
/// # Example
///
/// ```
/// use yencrs::{EncodeConfig, Encoder};
///
/// let config = EncodeConfig::default()
///     .with_part_size(4)
///     .with_file_name("greeting.txt");
/// let parts = Encoder::new(config).encode_bytes(&b"hello world"[..])?;
///
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[0].range(), 1..=4);
/// assert!(parts[2].is_final());
/// # Ok::<(), yencrs::EncodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Part {
    /// The escaped, line-folded wire bytes for this segment.
    pub data: Bytes,

    /// Logical name of the source, copied onto every part.
    pub file_name: String,

    /// 1-based index of this part within the run.
    pub part_num: u32,

    /// Number of parts the run produces.
    pub part_total: u32,

    /// First raw byte offset covered by this part (1-based, inclusive).
    pub start_byte: u64,

    /// Last raw byte offset covered by this part (1-based, inclusive).
    pub end_byte: u64,

    /// Raw (pre-encoding) byte count of this part.
    pub part_size: u64,

    /// Raw byte count of the entire source; the same on every part.
    pub total_size: u64,

    /// CRC32 of this part's raw bytes.
    pub pcrc32: u32,

    /// CRC32 of the entire raw source. Set only on the final part.
    pub crc32: Option<u32>,
}

impl Part {
    /// Returns the length of the encoded wire bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the part has no encoded bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the encoded wire bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns true if this is the last part of its run.
    ///
    /// Exactly the final part carries the whole-file [`crc32`](Part::crc32).
    pub fn is_final(&self) -> bool {
        self.part_num == self.part_total
    }

    /// Returns the raw byte range this part covers (1-based, inclusive).
    pub fn range(&self) -> std::ops::RangeInclusive<u64> {
        self.start_byte..=self.end_byte
    }

    /// Consumes the part and returns the encoded wire bytes.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Part {}/{} of {} ({} raw bytes @ {}..={}, pcrc32={:08x}",
            self.part_num,
            self.part_total,
            self.file_name,
            self.part_size,
            self.start_byte,
            self.end_byte,
            self.pcrc32,
        )?;
        if let Some(crc32) = self.crc32 {
            write!(f, ", crc32={:08x}", crc32)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(part_num: u32, part_total: u32) -> Part {
        Part {
            data: Bytes::from_static(b"JJJJ"),
            file_name: "data.bin".to_string(),
            part_num,
            part_total,
            start_byte: 5,
            end_byte: 8,
            part_size: 4,
            total_size: 8,
            pcrc32: 0xDEADBEEF,
            crc32: None,
        }
    }

    #[test]
    fn test_len() {
        let part = sample(1, 2);
        assert_eq!(part.len(), 4);
        assert!(!part.is_empty());
    }

    #[test]
    fn test_range() {
        let part = sample(1, 2);
        assert_eq!(part.range(), 5..=8);
        assert_eq!(part.end_byte - part.start_byte + 1, part.part_size);
    }

    #[test]
    fn test_is_final() {
        assert!(!sample(1, 2).is_final());
        assert!(sample(2, 2).is_final());
    }

    #[test]
    fn test_into_data() {
        let part = sample(1, 2);
        assert_eq!(part.into_data().as_ref(), b"JJJJ");
    }

    #[test]
    fn test_display() {
        let mut part = sample(2, 2);
        part.crc32 = Some(0x01020304);
        let s = part.to_string();
        assert!(s.contains("Part 2/2"));
        assert!(s.contains("data.bin"));
        assert!(s.contains("crc32=01020304"));
    }
}
