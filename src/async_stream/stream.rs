//! Async stream adapter for encoding.
//!
//! This module provides asynchronous encoding using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use yencrs::{encode_async, EncodeConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R, len: u64) -> Result<(), yencrs::EncodeError> {
//!     let config = EncodeConfig::default().with_file_name("data.bin");
//!     let mut stream = encode_async(reader, len, config)?;
//!
//!     while let Some(part) = stream.next().await {
//!         let part = part?;
//!         println!("part {}/{}", part.part_num, part.part_total);
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::codec;
use crate::config::EncodeConfig;
use crate::crc::Crc32;
use crate::error::EncodeError;
use crate::part::Part;

pin_project! {
    /// A stream that yields encoded parts from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// Raw bytes are staged until a full `part_size` chunk is available
    /// (reads rarely align with part boundaries), then encoded and
    /// yielded. Metadata stitching matches the synchronous
    /// [`PartIter`](crate::PartIter) exactly.
    #[derive(Debug)]
    pub struct PartStream<R> {
        #[pin]
        reader: R,
        buf: Vec<u8>,
        raw: Vec<u8>,
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
}

impl<R> PartStream<R> {
    /// Creates a new part stream from an async reader.
    ///
    /// The configuration is validated here, before the first read, and
    /// must carry a file name (async sources have no inherent one).
    ///
    /// # Arguments
    ///
    /// * `reader` - An async reader implementing `AsyncRead`
    /// * `total_size` - Raw byte length of the source
    /// * `config` - The encoding configuration
    pub fn new(reader: R, total_size: u64, config: EncodeConfig) -> Result<Self, EncodeError> {
        config.validate()?;
        let file_name = config
            .file_name()
            .ok_or(EncodeError::MissingFileName)?
            .to_string();

        let part_size = config.part_size().unwrap_or(total_size);
        let total_parts = if total_size == 0 {
            0
        } else {
            total_size.div_ceil(part_size) as u32
        };

        Ok(Self {
            reader,
            buf: vec![0u8; 8192],
            raw: Vec::new(),
            file_name,
            part_size,
            line_width: config.line_width(),
            total_size,
            total_parts,
            next_part: 1,
            start_byte: 1,
            crc: Crc32::new(),
            finished: false,
        })
    }
}

impl<R: AsyncRead + Unpin> PartStream<R> {
    /// Encodes `len` staged raw bytes and assembles the finished part.
    fn emit_part(&mut self, len: usize) -> Part {
        let encoded = codec::encode_part(&self.raw[..len], self.line_width);

        // Keep any staged bytes past the part boundary
        if len < self.raw.len() {
            self.raw.copy_within(len.., 0);
            self.raw.truncate(self.raw.len() - len);
        } else {
            self.raw.clear();
        }

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

impl<R: AsyncRead + Unpin> Stream for PartStream<R> {
    type Item = Result<Part, EncodeError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        if this.finished {
            return Poll::Ready(None);
        }

        loop {
            // A full part is staged; encode and yield it
            if this.part_size > 0 && this.raw.len() as u64 >= this.part_size {
                let len = this.part_size as usize;
                return Poll::Ready(Some(Ok(this.emit_part(len))));
            }

            match Pin::new(&mut this.reader).poll_read(cx, &mut this.buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(EncodeError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - emit remaining staged bytes if any
                    this.finished = true;
                    if !this.raw.is_empty() {
                        let len = this.raw.len();
                        return Poll::Ready(Some(Ok(this.emit_part(len))));
                    }
                    return Poll::Ready(None);
                }
                Poll::Ready(Ok(n)) => {
                    this.raw.extend_from_slice(&this.buf[..n]);
                }
            }
        }
    }
}

/// Creates a part stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
/// This works with any async runtime (tokio, async-std, smol, etc.).
///
/// The configuration must carry a file name; it and the part/line sizing
/// are validated before the first read.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use yencrs::{encode_async, EncodeConfig};
///
/// let file = tokio::fs::File::open("data.bin").await?;
/// let len = file.metadata().await?.len();
/// let config = EncodeConfig::default().with_file_name("data.bin");
/// let stream = encode_async(file.compat(), len, config)?;
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `total_size` - Raw byte length of the source
/// * `config` - The encoding configuration
///
/// # Returns
///
/// A [`PartStream`] that implements `Stream<Item = Result<Part, EncodeError>>`
pub fn encode_async<R: AsyncRead>(
    reader: R,
    total_size: u64,
    config: EncodeConfig,
) -> Result<PartStream<R>, EncodeError> {
    PartStream::new(reader, total_size, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    fn config() -> EncodeConfig {
        EncodeConfig::default()
            .with_part_size(100)
            .with_file_name("data.bin")
    }

    #[tokio::test]
    async fn test_part_stream_empty() {
        let reader: &[u8] = &[];
        let stream = encode_async(reader, 0, config()).unwrap();
        let parts: Vec<_> = futures_util::StreamExt::collect(stream).await;
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn test_part_stream_missing_name() {
        let reader: &[u8] = &[];
        let err = encode_async(reader, 0, EncodeConfig::default()).unwrap_err();
        assert!(matches!(err, EncodeError::MissingFileName));
    }

    #[tokio::test]
    async fn test_part_stream_matches_sync() {
        let data: Vec<u8> = (0..=255).cycle().take(250).collect();

        let reader: &[u8] = &data;
        let stream = encode_async(reader, data.len() as u64, config()).unwrap();
        let streamed: Vec<_> = futures_util::StreamExt::collect(stream).await;
        let streamed: Vec<Part> = streamed.into_iter().collect::<Result<_, _>>().unwrap();

        let collected = Encoder::new(config()).encode_bytes(data).unwrap();

        assert_eq!(streamed.len(), collected.len());
        for (s, c) in streamed.iter().zip(&collected) {
            assert_eq!(s.data, c.data);
            assert_eq!(s.part_num, c.part_num);
            assert_eq!(s.part_total, c.part_total);
            assert_eq!(s.start_byte, c.start_byte);
            assert_eq!(s.end_byte, c.end_byte);
            assert_eq!(s.pcrc32, c.pcrc32);
            assert_eq!(s.crc32, c.crc32);
        }
    }

    #[tokio::test]
    async fn test_final_part_carries_whole_file_crc() {
        let data: Vec<u8> = (0..=255).cycle().take(300).collect();

        let reader: &[u8] = &data;
        let stream = encode_async(reader, data.len() as u64, config()).unwrap();
        let parts: Vec<_> = futures_util::StreamExt::collect(stream).await;
        let parts: Vec<Part> = parts.into_iter().collect::<Result<_, _>>().unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].crc32, None);
        assert_eq!(parts[2].crc32, Some(Crc32::hash(&data)));
    }
}
