//! Error types for fixture verification operations.

use thiserror::Error;

/// Result type alias using `VerifyError`.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors that can occur while verifying fixture content.
///
/// The taxonomy is deliberately small: the input is either not an archive
/// at all, an entry cannot be decoded by its designated parser, or decoded
/// content does not match the expected fixed values. Unrecognized entry
/// extensions are not errors; they are skipped and counted in the report.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a well-formed ZIP archive.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// A recognized entry's bytes were rejected by the designated parser.
    #[error("failed to decode {entry}: {detail}")]
    Decode {
        /// Name of the entry (or source label) that failed to decode.
        entry: String,
        /// Parser-reported failure detail.
        detail: String,
    },

    /// Decoded content does not match the expected fixed value.
    #[error("content mismatch in {entry} ({check}): expected {expected}, got {actual}")]
    Mismatch {
        /// Name of the entry (or source label) being verified.
        entry: String,
        /// Which expectation was violated (row index, field path, cell
        /// coordinate, required substring).
        check: String,
        /// The expected value.
        expected: String,
        /// The value actually found.
        actual: String,
    },
}

impl VerifyError {
    /// Creates a `Decode` error for the given entry.
    pub fn decode(entry: &str, detail: impl Into<String>) -> Self {
        Self::Decode {
            entry: entry.to_owned(),
            detail: detail.into(),
        }
    }

    /// Creates a `Mismatch` error for the given entry and check.
    pub fn mismatch(
        entry: &str,
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            entry: entry.to_owned(),
            check: check.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Returns `true` if this error is a content mismatch (the input
    /// decoded cleanly but did not hold the expected values).
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Returns `true` if this error is a decode failure (a recognized
    /// entry whose bytes the designated parser rejected).
    #[must_use]
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the name of the entry this error concerns, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::Decode { entry, .. } | Self::Mismatch { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
