//! Error types for yencrs.

use std::fmt;

/// Errors that can occur during encoding operations.
#[derive(Debug)]
pub enum EncodeError {
    /// An I/O error occurred while reading the source.
    Io(std::io::Error),

    /// The source has no inherent name and none was configured.
    ///
    /// Reader sources (and paths without a final component) need a
    /// logical file name attached via
    /// [`EncodeConfig::with_file_name`](crate::EncodeConfig::with_file_name).
    MissingFileName,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Io(e) => write!(f, "io error: {}", e),
            EncodeError::MissingFileName => {
                write!(f, "missing file name: the source has no inherent name")
            }
            EncodeError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(e: std::io::Error) -> Self {
        EncodeError::Io(e)
    }
}
