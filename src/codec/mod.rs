//! yEnc byte transform implementation.
//!
//! This module contains the core per-byte encoding algorithm: the +42
//! offset, critical-byte escaping, and line folding.
//!
//! - [`encode_part`] - encodes one raw chunk into its wire form

mod yenc;

pub(crate) use yenc::encode_part;
