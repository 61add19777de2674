//! Defines [`PointArrayError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Ordinary bounds conditions are not errors: out-of-range reads return `None`, out-of-range
/// inserts append and out-of-range removes do nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PointArrayError {
    /// More points were requested from a source sequence than it holds.
    #[error("Requested {requested} points from a source of length {available}")]
    SourceTooShort {
        /// Number of points the caller asked to copy.
        requested: usize,
        /// Length of the source sequence.
        available: usize,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PointArrayError>;
