//! Encoding engine for splitting byte streams into parts.
//!
//! - [`Encoder`] - Configures and initiates encoding runs
//! - [`PartIter`] - Iterator that yields parts from a [`std::io::Read`] source

mod iter;

pub use iter::{Encoder, PartIter};
