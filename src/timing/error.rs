use thiserror::Error;

/// Errors raised when constructing a timing window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimingWindowError {
    #[error("Repeat count must be -1 (forever) or non-negative, got {0}")]
    InvalidRepeat(i32),

    #[error("Duration must be -1 (open forever) or non-negative, got {0} ms")]
    InvalidDuration(i64),

    #[error("Period must be non-negative, got {0} ms")]
    InvalidPeriod(i64),
}
