//! Error taxonomy shared by every pipeline stage.
//!
//! [`Error::is_value_error`] separates bad user-supplied values from file and
//! runtime conditions; the binary uses it to pick the message prefix and the
//! exit status.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Where a malformed input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOrigin {
    /// A command-line value, such as the target date.
    Argument,
    /// The contents of the log file.
    File,
}

#[derive(Debug, Error)]
pub enum Error {
    // Shape
    #[error("invalid {what}: {value:?}")]
    InvalidFormat {
        origin: FormatOrigin,
        what: &'static str,
        value: String,
    },

    // Files
    #[error("no such file: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Extraction
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Configuration
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// A malformed command-line value.
    pub fn invalid_argument(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            origin: FormatOrigin::Argument,
            what,
            value: value.into(),
        }
    }

    /// A log file whose header or rows have the wrong shape.
    pub fn invalid_file(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            origin: FormatOrigin::File,
            what,
            value: value.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Bad user-supplied value, as opposed to a file or runtime condition.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat {
                origin: FormatOrigin::Argument,
                ..
            }
        )
    }
}
