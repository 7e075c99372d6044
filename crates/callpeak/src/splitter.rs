//! Day splitting: cut a call into one segment per UTC calendar day it touches.
//!
//! All arithmetic is done on integer epoch milliseconds. A day is identified by
//! its index since 1970-01-01 (negative before the epoch); [`day_date`] turns
//! that index into a calendar date only when a label is needed.

use chrono::NaiveDate;

use crate::error::{PeakError, Result};
use crate::record::CallRecord;

/// Milliseconds in one UTC day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// The portion of a call that falls within a single UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySegment {
    /// Days since 1970-01-01 (UTC).
    pub day: i64,
    pub customer_id: i64,
    pub call_id: String,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

impl DaySegment {
    /// Whether the segment is active at `t`. Coverage is `[start, end)`, so
    /// zero-length segments never cover anything.
    pub fn covers(&self, t: i64) -> bool {
        self.start_timestamp <= t && t < self.end_timestamp
    }

    pub fn is_empty(&self) -> bool {
        self.start_timestamp == self.end_timestamp
    }

    /// The calendar date of this segment's day.
    pub fn date(&self) -> Result<NaiveDate> {
        day_date(self.day)
    }
}

/// Index of the UTC day containing `ms`. Floors, so `-1` is 1969-12-31.
pub fn utc_day(ms: i64) -> i64 {
    ms.div_euclid(MILLIS_PER_DAY)
}

/// Epoch milliseconds of midnight UTC at the start of `day`.
pub fn day_start_millis(day: i64) -> i64 {
    day * MILLIS_PER_DAY
}

/// Calendar date for a day index.
///
/// # Errors
/// Returns `PeakError::TimestampOutOfRange` if the day lies outside the range
/// `chrono` can represent.
pub fn day_date(day: i64) -> Result<NaiveDate> {
    day.checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(|d| i32::try_from(d).ok())
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| PeakError::TimestampOutOfRange(day.saturating_mul(MILLIS_PER_DAY)))
}

/// Split a call into per-day segments, in chronological order.
///
/// A call that starts and ends on the same UTC day comes back as a single
/// segment covering the whole call, even when it is zero-length. Otherwise
/// every day from the start day to the end day (inclusive) gets a segment
/// clipped to that day's midnights, and zero-length segments are dropped.
/// This is what happens to the trailing day of a call ending exactly at
/// midnight: the call is not active on that day at all.
///
/// A record with `end < start` yields no segments; see [`CallRecord::validate`].
pub fn split_by_day(call: &CallRecord) -> Vec<DaySegment> {
    let first = utc_day(call.start_timestamp);
    let last = utc_day(call.end_timestamp);

    if first == last {
        return vec![segment(call, first, call.start_timestamp, call.end_timestamp)];
    }

    (first..=last)
        .filter_map(|day| {
            let start = if day == first {
                call.start_timestamp
            } else {
                day_start_millis(day)
            };
            let end = if day == last {
                call.end_timestamp
            } else {
                day_start_millis(day + 1)
            };
            (start != end).then(|| segment(call, day, start, end))
        })
        .collect()
}

fn segment(call: &CallRecord, day: i64, start: i64, end: i64) -> DaySegment {
    DaySegment {
        day,
        customer_id: call.customer_id,
        call_id: call.call_id.clone(),
        start_timestamp: start,
        end_timestamp: end,
    }
}
