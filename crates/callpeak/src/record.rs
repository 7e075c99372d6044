//! Input and output records: call detail records in, per-day peaks out.
//!
//! Field names follow the wire format (`customerId`, `callId`, ...) so the
//! types can be decoded and encoded directly by [`crate::codec`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PeakError, Result};

/// A single call detail record.
///
/// The interval is half-open: `start_timestamp` is inclusive and
/// `end_timestamp` is exclusive, both in epoch milliseconds (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub customer_id: i64,
    pub call_id: String,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

impl CallRecord {
    pub fn new(
        customer_id: i64,
        call_id: impl Into<String>,
        start_timestamp: i64,
        end_timestamp: i64,
    ) -> Self {
        Self {
            customer_id,
            call_id: call_id.into(),
            start_timestamp,
            end_timestamp,
        }
    }

    /// Length of the call in milliseconds. Zero-length calls are valid.
    pub fn duration_ms(&self) -> i64 {
        self.end_timestamp - self.start_timestamp
    }

    /// Check that the record can be split into UTC days.
    ///
    /// # Errors
    /// Returns `PeakError::InvalidInterval` if the call ends before it starts.
    /// Returns `PeakError::TimestampOutOfRange` if either timestamp has no UTC calendar date.
    pub fn validate(&self) -> Result<()> {
        if self.end_timestamp < self.start_timestamp {
            return Err(PeakError::InvalidInterval {
                call_id: self.call_id.clone(),
                start: self.start_timestamp,
                end: self.end_timestamp,
            });
        }
        for ts in [self.start_timestamp, self.end_timestamp] {
            if DateTime::<Utc>::from_timestamp_millis(ts).is_none() {
                return Err(PeakError::TimestampOutOfRange(ts));
            }
        }
        Ok(())
    }
}

/// Peak concurrency for one customer on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub customer_id: i64,
    /// UTC calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub max_concurrent_calls: usize,
    /// First instant at which the peak is reached. `None` when every segment
    /// on the day is zero-length, so nothing is ever active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Calls active at `timestamp`, in input order.
    pub call_ids: Vec<String>,
}
