//! Error types for callpeak operations.

use thiserror::Error;

/// Errors that can occur while validating, analyzing, or (de)serializing call records.
#[derive(Error, Debug)]
pub enum PeakError {
    /// A call record ends before it starts.
    #[error("Invalid interval for call '{call_id}': end {end} is before start {start}")]
    InvalidInterval {
        call_id: String,
        start: i64,
        end: i64,
    },

    /// A timestamp cannot be mapped onto a UTC calendar date.
    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),

    /// The input or output payload was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout callpeak.
pub type Result<T> = std::result::Result<T, PeakError>;
