//! Configuration for encoding behavior.
//!
//! This module provides the type that configures how encoding is performed:
//!
//! - [`EncodeConfig`] - Controls part splitting, line folding, and the
//!   logical file name attached to every part
//!
//! # Example
//!
//! ```
//! use yencrs::EncodeConfig;
//!
//! // Multi-part encoding, 500 KiB of raw bytes per part
//! let config = EncodeConfig::new(500 * 1024, 128)?;
//!
//! // Builder pattern
//! let config = EncodeConfig::default()
//!     .with_part_size(500 * 1024)
//!     .with_file_name("backup.tar");
//!
//! # Ok::<(), yencrs::EncodeError>(())
//! ```

use crate::error::EncodeError;

/// Default number of encoded bytes per output line before a CRLF is
/// inserted.
pub const DEFAULT_LINE_WIDTH: usize = 128;

/// Configuration for one encoding run.
///
/// `EncodeConfig` controls how the raw source is split into parts and how
/// the encoded output is folded into lines:
///
/// - Part size (`part_size`) - Maximum raw bytes per part; `None` means a
///   single part spanning the entire source
/// - Line width (`line_width`) - Maximum encoded bytes per output line
/// - File name (`file_name`) - Logical name copied onto every part;
///   required when the source has no inherent name (any `Read` source)
///
/// # Constraints
///
/// `part_size` (when set) and `line_width` must be non-zero. Validation
/// happens eagerly when an encoding run starts, before any byte is read.
///
/// # Example
///
/// ```
/// use yencrs::EncodeConfig;
///
/// // Single part, 128-byte lines
/// let config = EncodeConfig::default();
///
/// // Checked constructor
/// let config = EncodeConfig::new(100_000, 128)?;
///
/// // Builder pattern
/// let config = EncodeConfig::default()
///     .with_part_size(100_000)
///     .with_line_width(64)
///     .with_file_name("data.bin");
/// # Ok::<(), yencrs::EncodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodeConfig {
    /// Maximum raw bytes per part. `None` encodes the source as one part.
    part_size: Option<u64>,

    /// Maximum encoded bytes per output line.
    line_width: usize,

    /// Logical file name attached to every part.
    file_name: Option<String>,
}

impl EncodeConfig {
    /// Creates a new configuration with the specified part size and line
    /// width.
    ///
    /// # Arguments
    ///
    /// * `part_size` - Maximum raw bytes per part
    /// * `line_width` - Maximum encoded bytes per output line
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidConfig`] if either value is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use yencrs::EncodeConfig;
    ///
    /// let config = EncodeConfig::new(100_000, 128)?;
    /// assert_eq!(config.part_size(), Some(100_000));
    /// # Ok::<(), yencrs::EncodeError>(())
    /// ```
    pub fn new(part_size: u64, line_width: usize) -> Result<Self, EncodeError> {
        let config = Self {
            part_size: Some(part_size),
            line_width,
            file_name: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the maximum raw bytes per part.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`EncodeConfig::validate`] to check if the configuration is valid.
    pub fn with_part_size(mut self, size: u64) -> Self {
        self.part_size = Some(size);
        self
    }

    /// Sets the maximum encoded bytes per output line.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`EncodeConfig::validate`] to check if the configuration is valid.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the logical file name attached to every part.
    ///
    /// Overrides the name derived from a path source, and is required for
    /// reader sources.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Returns the configured part size, or `None` for single-part runs.
    pub fn part_size(&self) -> Option<u64> {
        self.part_size
    }

    /// Returns the line width.
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Returns the configured file name, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use yencrs::EncodeConfig;
    ///
    /// let config = EncodeConfig::default().with_part_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.part_size == Some(0) {
            return Err(EncodeError::InvalidConfig {
                message: "part_size must be non-zero",
            });
        }

        if self.line_width == 0 {
            return Err(EncodeError::InvalidConfig {
                message: "line_width must be non-zero",
            });
        }

        Ok(())
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            part_size: None,
            line_width: DEFAULT_LINE_WIDTH,
            file_name: None,
        }
    }
}
