//! Custom error types for the geneweb-gedcom crate.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by an external record-schema decoder.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal: a half-built document is not a valid GEDCOM file,
/// so the whole export aborts on the first error.
#[derive(Debug, Error)]
pub enum GwdbError {
    /// A required store file is absent from the base directory.
    #[error("File missing: {}", path.display())]
    MissingFile { path: PathBuf },

    /// An I/O error while working on a specific file.
    #[error("I/O error in {} while {phase}: {source}", path.display())]
    Io {
        path: PathBuf,
        phase: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The file is structurally invalid (short read, truncated record, trailing bytes).
    #[error("Malformed file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The declared total size at the head of a data file disagrees with the bytes consumed.
    #[error("Size mismatch in {}: header declares {expected} bytes, records account for {found} bytes", path.display())]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        found: u64,
    },

    /// The base info timestamp is not a decimal number.
    #[error("Invalid timestamp {value:?} in {}", path.display())]
    InvalidTimestamp { path: PathBuf, value: String },

    /// The external schema decoder rejected a record.
    #[error("Failed to decode {kind} record #{index} (starts with {preview}): {source}")]
    Decode {
        kind: &'static str,
        index: usize,
        preview: String,
        #[source]
        source: BoxError,
    },

    /// A schema enumeration carried a value with no known meaning.
    #[error("Unknown {what} code: {code}")]
    UnknownCode { what: &'static str, code: u32 },

    /// A document pointer could not be parsed back to a record index.
    #[error("Invalid pointer {pointer:?}: expected '{prefix}' followed by a decimal index")]
    InvalidPointer { pointer: String, prefix: char },
}

impl GwdbError {
    pub(crate) fn io(path: impl Into<PathBuf>, phase: &'static str, source: std::io::Error) -> Self {
        GwdbError::Io {
            path: path.into(),
            phase,
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GwdbError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `GwdbError` type.
pub type Result<T> = std::result::Result<T, GwdbError>;
