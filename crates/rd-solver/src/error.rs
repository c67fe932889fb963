//! Error types for divider solving.

use rd_core::CoreError;
use rd_series::SeriesError;
use thiserror::Error;

/// Errors that can occur while setting up or running a sweep.
///
/// Infeasibility of a single candidate is not an error; it is the expected
/// `FitOutcome::Infeasible` value and causes a per-candidate skip.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::InvalidInput {
            what: "vout must be smaller than vcc",
        };
        assert!(err.to_string().contains("vout"));
    }

    #[test]
    fn series_error_conversion() {
        let err: SolverError = SeriesError::NonPositiveTarget { value: -1.0 }.into();
        assert!(matches!(err, SolverError::Series(_)));
    }
}
