use thiserror::Error;

/// Errors returned by spline mutations and constructors.
///
/// Evaluation never fails: an empty curve or a non-finite parameter yields `NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("index {index} is out of range for {len} control points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("requested {requested} control points but only {available} values were supplied")]
    InsufficientValues { requested: usize, available: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("dimension must be at least 1")]
    InvalidDimension,
}

pub type Result<T> = std::result::Result<T, SplineError>;
