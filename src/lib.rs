//! yencrs
//!
//! Streaming yEnc encoding for Rust.
//!
//! `yencrs` transforms a byte stream into printable, line-wrapped yEnc
//! parts with per-part and whole-file CRC32 checksums. It is designed as
//! a small, composable primitive for:
//!
//! - Usenet/NNTP posting pipelines
//! - binary attachments on line-oriented text channels
//! - any transport that needs 8-bit data in printable lines
//!
//! The crate intentionally:
//! - does NOT decode or verify received data
//! - does NOT add `=ybegin`/`=ypart`/`=yend` framing (a protocol layer's job)
//! - does NOT manage networking or persistence
//! - does NOT manage concurrency
//!
//! It only does one thing: **Read bytes → yield parts**
//!
//! # Sync
//!
//! ```no_run
//! use yencrs::{Encoder, EncodeConfig, EncodeError};
//!
//! fn main() -> Result<(), EncodeError> {
//!     let config = EncodeConfig::default().with_part_size(500_000);
//!     let encoder = Encoder::new(config);
//!
//!     for part in encoder.encode_path("data.bin")? {
//!         println!("part {}/{}: {} encoded bytes", part.part_num, part.part_total, part.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
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
//!         println!("part {}", part.part_num);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod encoder;
mod error;
mod part;

mod codec; // internal yenc transform
mod crc; // internal crc32fast wrapper

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_LINE_WIDTH, EncodeConfig};
pub use encoder::{Encoder, PartIter};
pub use error::EncodeError;
pub use part::Part;

#[cfg(feature = "async-io")]
pub use async_stream::{PartStream, encode_async};
