//! Error types for series lookups.

use thiserror::Error;

/// Errors that can occur during series value lookup.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// The theoretical target resistance was zero or negative. This means
    /// the caller derived it from an invalid ratio; the offending candidate
    /// is skipped, not the whole sweep.
    #[error("Target resistance must be positive, got {value}")]
    NonPositiveTarget { value: f64 },
}

pub type SeriesResult<T> = Result<T, SeriesError>;
