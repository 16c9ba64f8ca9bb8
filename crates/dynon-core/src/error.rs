//! Error types for DYNON parsing, conversion, and editing operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Errors that can occur while parsing, converting, or editing a document.
///
/// Map lookups are not represented here: a missing key is an ordinary
/// outcome, so those operations return `Option` instead of failing.
#[derive(Error, Debug)]
pub enum DynonError {
    /// The input text was not valid JSON. `position` is the 0-based byte
    /// offset where the error was detected.
    #[error("parse error at byte {position}: {message}")]
    Parse { position: usize, message: String },

    /// A file could not be read at all (missing, unreadable, or not UTF-8).
    /// Distinct from `Parse` so callers can tell an absent file from a
    /// present-but-malformed one.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A coercion was asked of a node of the wrong kind.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: Kind, actual: Kind },

    /// An array was indexed past its end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Compound division with a zero divisor. The target is left unchanged.
    #[error("integer division by zero")]
    DivideByZero,
}

/// Convenience alias used throughout dynon-core.
pub type Result<T> = std::result::Result<T, DynonError>;
