//! Core encoding engine - Encoder and PartIter.
//!
//! This module implements the synchronous encoding API. It provides two
//! main types:
//!
//! - [`Encoder`] - Configures and initiates encoding runs
//! - [`PartIter`] - Iterator that yields parts from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```ignore
//! use yencrs::{Encoder, EncodeConfig};
//!
//! let encoder = Encoder::new(EncodeConfig::default().with_part_size(500_000));
//!
//! for part in encoder.encode_path("data.bin")? {
//!     println!("part {}/{}: {} bytes", part.part_num, part.part_total, part.len());
//! }
//! # Ok::<(), yencrs::EncodeError>(())
//! ```

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use bytes::Bytes;

use crate::codec;
use crate::config::EncodeConfig;
use crate::crc::Crc32;
use crate::error::EncodeError;
use crate::part::Part;

/// An encoder that splits byte streams into yEnc-encoded parts.
///
/// `Encoder` is the high-level API for synchronous encoding. It holds a
/// configuration and provides methods to encode data from various sources.
/// Each `encode_*` method performs one complete run: a single sequential
/// pass over the source, yielding parts in order.
///
/// Parts can be collected (`encode_path`, `encode_reader`, `encode_bytes`)
/// or handed to a sink one at a time (`encode_path_with`,
/// `encode_reader_with`), which keeps memory flat for arbitrarily large
/// sources. [`Encoder::parts`] exposes the underlying iterator directly.
///
/// # Example
///
/// ```
/// use yencrs::{Encoder, EncodeConfig};
///
/// let config = EncodeConfig::default().with_file_name("hello.txt");
/// let encoder = Encoder::new(config);
///
/// let parts = encoder.encode_bytes(&b"hello world"[..])?;
/// assert_eq!(parts.len(), 1);
/// assert_eq!(parts[0].total_size, 11);
/// # Ok::<(), yencrs::EncodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    config: EncodeConfig,
}

impl Encoder {
    /// Creates a new encoder with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use yencrs::{Encoder, EncodeConfig};
    ///
    /// let encoder = Encoder::new(EncodeConfig::default());
    /// ```
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this encoder.
    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Encodes the file at `path` and collects the parts.
    ///
    /// The total size comes from file metadata and the logical name from
    /// the path's final component; a configured
    /// [`file_name`](EncodeConfig::with_file_name) overrides the latter.
    ///
    /// # Errors
    ///
    /// Fails before any read on an invalid configuration, or with
    /// [`EncodeError::MissingFileName`] when the path has no final
    /// component and no name was configured. I/O errors are propagated.
    pub fn encode_path(&self, path: impl AsRef<Path>) -> Result<Vec<Part>, EncodeError> {
        let (file, total_size, file_name) = self.open(path.as_ref())?;
        self.parts(file, total_size, file_name)?.collect()
    }

    /// Encodes the file at `path`, handing each part to `sink` as soon as
    /// it is complete.
    ///
    /// Parts are not retained, so the run's memory use is bounded by one
    /// part regardless of source size.
    pub fn encode_path_with(
        &self,
        path: impl AsRef<Path>,
        mut sink: impl FnMut(Part),
    ) -> Result<(), EncodeError> {
        let (file, total_size, file_name) = self.open(path.as_ref())?;
        for part in self.parts(file, total_size, file_name)? {
            sink(part?);
        }
        Ok(())
    }

    /// Encodes `total_size` bytes from `reader` and collects the parts.
    ///
    /// Reader sources have no inherent name, so the configuration must
    /// carry one; otherwise [`EncodeError::MissingFileName`] is returned
    /// before any read.
    pub fn encode_reader<R: Read>(
        &self,
        reader: R,
        total_size: u64,
    ) -> Result<Vec<Part>, EncodeError> {
        let file_name = self.configured_name()?;
        self.parts(reader, total_size, file_name)?.collect()
    }

    /// Encodes `total_size` bytes from `reader`, handing each part to
    /// `sink` as soon as it is complete.
    pub fn encode_reader_with<R: Read>(
        &self,
        reader: R,
        total_size: u64,
        mut sink: impl FnMut(Part),
    ) -> Result<(), EncodeError> {
        let file_name = self.configured_name()?;
        for part in self.parts(reader, total_size, file_name)? {
            sink(part?);
        }
        Ok(())
    }

    /// Encodes an in-memory buffer.
    ///
    /// This is a convenience method for data that is already in memory;
    /// it behaves exactly like [`Encoder::encode_reader`] over the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use yencrs::{Encoder, EncodeConfig};
    ///
    /// let config = EncodeConfig::default()
    ///     .with_part_size(100)
    ///     .with_file_name("data.bin");
    /// let parts = Encoder::new(config).encode_bytes(vec![0u8; 300])?;
    ///
    /// assert_eq!(parts.len(), 3);
    /// # Ok::<(), yencrs::EncodeError>(())
    /// ```
    pub fn encode_bytes(&self, data: impl Into<Bytes>) -> Result<Vec<Part>, EncodeError> {
        let data = data.into();
        let total_size = data.len() as u64;
        self.encode_reader(Cursor::new(data), total_size)
    }

    /// Creates a part iterator over a reader.
    ///
    /// This is the primitive the `encode_*` methods are built on. The
    /// configuration is validated here, before the first read.
    ///
    /// # Arguments
    ///
    /// * `reader` - Any type implementing [`std::io::Read`]
    /// * `total_size` - Raw byte length of the source
    /// * `file_name` - Logical name attached to every part
    ///
    /// # Returns
    ///
    /// A [`PartIter`] that yields [`Result<Part, EncodeError>`]
    pub fn parts<R: Read>(
        &self,
        reader: R,
        total_size: u64,
        file_name: impl Into<String>,
    ) -> Result<PartIter<R>, EncodeError> {
        self.config.validate()?;
        Ok(PartIter::new(
            reader,
            total_size,
            file_name.into(),
            &self.config,
        ))
    }

    /// Opens a path source: file handle, metadata length, resolved name.
    fn open(&self, path: &Path) -> Result<(File, u64, String), EncodeError> {
        let file_name = match self.config.file_name() {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or(EncodeError::MissingFileName)?,
        };
        let file = File::open(path)?;
        let total_size = file.metadata()?.len();
        Ok((file, total_size, file_name))
    }

    fn configured_name(&self) -> Result<String, EncodeError> {
        self.config
            .file_name()
            .map(str::to_string)
            .ok_or(EncodeError::MissingFileName)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncodeConfig::default())
    }
}

/// An iterator that yields encoded parts from a reader.
///
/// `PartIter` reads up to `part_size` raw bytes per step, encodes them,
/// and yields the finished [`Part`]. The part count, byte ranges, and the
/// running whole-file CRC32 are stitched across steps; the final part
/// carries the combined checksum of the whole source.
///
/// The run is strictly linear: one sequential pass, no re-reads. An I/O
/// error ends the iteration after being yielded once.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use yencrs::{Encoder, EncodeConfig};
///
/// let data = vec![0u8; 250];
/// let encoder = Encoder::new(EncodeConfig::new(100, 128)?);
///
/// let mut iter = encoder.parts(Cursor::new(&data), 250, "data.bin")?;
/// let first = iter.next().unwrap()?;
/// assert_eq!((first.part_num, first.part_total), (1, 3));
/// # Ok::<(), yencrs::EncodeError>(())
/// ```
pub struct PartIter<R> {
    reader: R,
    file_name: String,
    part_size: u64,
    line_width: usize,
    total_size: u64,
    total_parts: u32,
    next_part: u32,
    start_byte: u64,
    crc: Crc32,
    finished: bool,
}

impl<R: Read> PartIter<R> {
    /// Creates a new part iterator.
    ///
    /// `total_parts` is fixed here, before the first read. An unset
    /// `part_size` resolves to the whole source, so a non-empty source
    /// yields exactly one part.
    fn new(reader: R, total_size: u64, file_name: String, config: &EncodeConfig) -> Self {
        let part_size = config.part_size().unwrap_or(total_size);
        let total_parts = if total_size == 0 {
            0
        } else {
            total_size.div_ceil(part_size) as u32
        };

        Self {
            reader,
            file_name,
            part_size,
            line_width: config.line_width(),
            total_size,
            total_parts,
            next_part: 1,
            start_byte: 1,
            crc: Crc32::new(),
            finished: false,
        }
    }

    /// Encodes one raw chunk and assembles the finished part.
    fn emit_part(&mut self, raw: &[u8]) -> Part {
        let encoded = codec::encode_part(raw, self.line_width);

        self.crc.combine(&encoded.crc);

        let part_num = self.next_part;
        let start_byte = self.start_byte;
        let end_byte = start_byte + encoded.raw_len - 1;
        let crc32 = (part_num == self.total_parts).then(|| self.crc.finalize());

        self.next_part += 1;
        self.start_byte = end_byte + 1;

        Part {
            data: encoded.data,
            file_name: self.file_name.clone(),
            part_num,
            part_total: self.total_parts,
            start_byte,
            end_byte,
            part_size: encoded.raw_len,
            total_size: self.total_size,
            pcrc32: encoded.crc.finalize(),
            crc32,
        }
    }
}

impl<R: Read> Iterator for PartIter<R> {
    type Item = Result<Part, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut raw = Vec::with_capacity(self.part_size.min(self.total_size) as usize);
        match (&mut self.reader).take(self.part_size).read_to_end(&mut raw) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => Some(Ok(self.emit_part(&raw))),
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LINE_WIDTH;

    #[test]
    fn test_empty_source_yields_no_parts() {
        let encoder = Encoder::new(EncodeConfig::default().with_file_name("empty.bin"));
        let parts = encoder.encode_bytes(Bytes::new()).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_single_part_by_default() {
        let encoder = Encoder::new(EncodeConfig::default().with_file_name("data.bin"));
        let parts = encoder.encode_bytes(vec![0x20u8; 1000]).unwrap();

        assert_eq!(parts.len(), 1);
        let part = &parts[0];
        assert_eq!(part.part_num, 1);
        assert_eq!(part.part_total, 1);
        assert_eq!(part.start_byte, 1);
        assert_eq!(part.end_byte, 1000);
        assert_eq!(part.part_size, 1000);
        assert_eq!(part.total_size, 1000);
        assert_eq!(part.crc32, Some(part.pcrc32));
    }

    #[test]
    fn test_even_split() {
        let config = EncodeConfig::new(100, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts = Encoder::new(config).encode_bytes(vec![7u8; 300]).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].range(), 1..=100);
        assert_eq!(parts[1].range(), 101..=200);
        assert_eq!(parts[2].range(), 201..=300);
        for part in &parts {
            assert_eq!(part.part_total, 3);
            assert_eq!(part.total_size, 300);
        }
    }

    #[test]
    fn test_uneven_split_rounds_up() {
        let config = EncodeConfig::new(100, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts = Encoder::new(config).encode_bytes(vec![7u8; 250]).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].range(), 201..=250);
        assert_eq!(parts[2].part_size, 50);
    }

    #[test]
    fn test_source_shorter_than_part_size() {
        let config = EncodeConfig::new(1000, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts = Encoder::new(config).encode_bytes(vec![7u8; 10]).unwrap();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].part_total, 1);
    }

    #[test]
    fn test_only_final_part_carries_whole_file_crc() {
        let data: Vec<u8> = (0..=255).cycle().take(300).collect();
        let config = EncodeConfig::new(100, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts = Encoder::new(config).encode_bytes(data.clone()).unwrap();

        assert_eq!(parts[0].crc32, None);
        assert_eq!(parts[1].crc32, None);
        assert_eq!(parts[2].crc32, Some(Crc32::hash(&data)));
    }

    #[test]
    fn test_pcrc32_covers_each_slice() {
        let data: Vec<u8> = (0..=255).cycle().take(250).collect();
        let config = EncodeConfig::new(100, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts = Encoder::new(config).encode_bytes(data.clone()).unwrap();

        assert_eq!(parts[0].pcrc32, Crc32::hash(&data[..100]));
        assert_eq!(parts[1].pcrc32, Crc32::hash(&data[100..200]));
        assert_eq!(parts[2].pcrc32, Crc32::hash(&data[200..]));
    }

    #[test]
    fn test_missing_file_name_fails_before_reading() {
        struct PanicReader;
        impl Read for PanicReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                panic!("must not be read");
            }
        }

        let encoder = Encoder::new(EncodeConfig::default());
        let err = encoder.encode_reader(PanicReader, 10).unwrap_err();
        assert!(matches!(err, EncodeError::MissingFileName));
    }

    #[test]
    fn test_invalid_config_fails_before_reading() {
        struct PanicReader;
        impl Read for PanicReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                panic!("must not be read");
            }
        }

        let config = EncodeConfig::default()
            .with_line_width(0)
            .with_file_name("data.bin");
        let err = Encoder::new(config)
            .encode_reader(PanicReader, 10)
            .unwrap_err();
        assert!(matches!(err, EncodeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_io_error_is_propagated_and_terminal() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
            }
        }

        let encoder = Encoder::new(EncodeConfig::default().with_file_name("data.bin"));
        let mut iter = encoder.parts(FailingReader, 10, "data.bin").unwrap();

        assert!(matches!(iter.next(), Some(Err(EncodeError::Io(_)))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_short_reads_still_fill_parts() {
        // Yields one byte per read call; take()/read_to_end must still
        // assemble full-size parts.
        struct OneByteReader {
            remaining: usize,
        }
        impl Read for OneByteReader {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.remaining == 0 || buf.is_empty() {
                    return Ok(0);
                }
                buf[0] = 0x20;
                self.remaining -= 1;
                Ok(1)
            }
        }

        let config = EncodeConfig::new(10, DEFAULT_LINE_WIDTH)
            .unwrap()
            .with_file_name("data.bin");
        let parts: Vec<Part> = Encoder::new(config)
            .parts(OneByteReader { remaining: 25 }, 25, "data.bin")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].part_size, 10);
        assert_eq!(parts[1].part_size, 10);
        assert_eq!(parts[2].part_size, 5);
    }
}
