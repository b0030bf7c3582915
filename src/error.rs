//! Error types

use std::{io, path::PathBuf};
use thiserror::Error;

/// Error parsing an invalid string representation of UUID.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// The input (after an optional `urn:uuid:` or `uuid:` prefix) is not 36 characters long.
    #[error("invalid string representation: expected 36 characters, found {0}")]
    InvalidLength(usize),

    /// A hexadecimal position holds something other than a hex digit.
    #[error("invalid string representation: non-hexadecimal character at position {0}")]
    InvalidCharacter(usize),

    /// One of the positions 8, 13, 18, and 23 does not hold a hyphen.
    #[error("invalid string representation: hyphen expected at position {0}")]
    MisplacedHyphen(usize),
}

/// The error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed string input.
    #[error(transparent)]
    Format(#[from] ParseError),

    /// A byte source ended before yielding 16 bytes.
    #[error("truncated input: expected 16 bytes, read {read}")]
    TruncatedInput {
        /// Number of bytes read before the source was exhausted.
        read: usize,
    },

    /// A byte source failed for a reason other than running out of data.
    #[error("failed to read UUID bytes: {0}")]
    Io(#[from] io::Error),

    /// The persisted state is corrupt or inaccessible.
    #[error("state error at {path}: {cause}")]
    State {
        /// Location of the backing resource.
        path: PathBuf,
        /// Reason for the failure.
        cause: String,
    },

    /// A write was attempted on a read-only state backend.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A configuration value could not be understood.
    #[error("invalid configuration value for {key}: '{value}'")]
    Config {
        /// The configuration key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl Error {
    pub(crate) fn state(path: impl Into<PathBuf>, cause: impl Into<String>) -> Self {
        Self::State {
            path: path.into(),
            cause: cause.into(),
        }
    }
}
