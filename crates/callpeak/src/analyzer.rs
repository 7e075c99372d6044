//! Peak concurrency per customer per UTC day.
//!
//! Calls are grouped by customer, split into day segments, and grouped again
//! by day. Within a day the number of active calls can only rise at a segment
//! start, so sampling every start instant is enough to find the maximum.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::Result;
use crate::record::{CallRecord, ResultEntry};
use crate::splitter::{day_date, split_by_day, DaySegment};

/// How to choose between instants that reach the same peak count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the first instant, in input order of the segments, that reaches the
    /// peak. Later instants with the same count never replace it, even when
    /// they are chronologically earlier.
    #[default]
    ScanOrder,
    /// Keep the chronologically earliest instant that reaches the peak.
    Earliest,
}

/// Computes [`ResultEntry`] values from call records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrencyAnalyzer {
    tie_break: TieBreak,
}

impl ConcurrencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Compute one entry per (customer, UTC day) touched by any call.
    ///
    /// Entries are ordered by customer id, then chronologically by date. For
    /// years 0 through 9999 this is the same as ordering the `YYYY-MM-DD`
    /// strings; beyond that chrono writes signed years (`+10000-01-01`), and
    /// those entries still sort after `9999-12-31`. Input order matters only
    /// for tie-breaking and for the order of `call_ids`; the input does not
    /// need to be sorted by time.
    ///
    /// # Errors
    /// Fails on the first record that does not pass [`CallRecord::validate`].
    pub fn analyze(&self, calls: &[CallRecord]) -> Result<Vec<ResultEntry>> {
        for call in calls {
            call.validate()?;
        }

        let mut customers: BTreeMap<i64, Vec<&CallRecord>> = BTreeMap::new();
        for call in calls {
            customers.entry(call.customer_id).or_default().push(call);
        }
        debug!(
            calls = calls.len(),
            customers = customers.len(),
            "grouped calls by customer"
        );

        // Both maps iterate in key order, so entries come out already sorted
        // by (customer id, date).
        let mut results = Vec::new();
        for (customer_id, customer_calls) in customers {
            let mut days: BTreeMap<i64, Vec<DaySegment>> = BTreeMap::new();
            for call in customer_calls {
                for segment in split_by_day(call) {
                    days.entry(segment.day).or_default().push(segment);
                }
            }
            trace!(customer_id, days = days.len(), "split customer calls by day");

            for (day, segments) in days {
                results.push(self.peak_for_day(customer_id, day, &segments)?);
            }
        }

        Ok(results)
    }

    fn peak_for_day(
        &self,
        customer_id: i64,
        day: i64,
        segments: &[DaySegment],
    ) -> Result<ResultEntry> {
        let mut max = 0usize;
        let mut timestamp: Option<i64> = None;
        let mut call_ids: Vec<String> = Vec::new();

        for candidate in segments {
            let t = candidate.start_timestamp;
            let count = segments.iter().filter(|s| s.covers(t)).count();

            let replaces = match self.tie_break {
                TieBreak::ScanOrder => count > max,
                TieBreak::Earliest => {
                    count > max || (count == max && timestamp.is_some_and(|best| t < best))
                }
            };
            if replaces {
                max = count;
                timestamp = Some(t);
                call_ids = segments
                    .iter()
                    .filter(|s| s.covers(t))
                    .map(|s| s.call_id.clone())
                    .collect();
            }
        }

        let date = day_date(day)?;
        debug!(customer_id, %date, max, ?timestamp, "computed daily peak");

        Ok(ResultEntry {
            customer_id,
            date,
            max_concurrent_calls: max,
            timestamp,
            call_ids,
        })
    }
}

/// Analyze `calls` with the default [`TieBreak::ScanOrder`] policy.
///
/// # Errors
/// See [`ConcurrencyAnalyzer::analyze`].
pub fn analyze(calls: &[CallRecord]) -> Result<Vec<ResultEntry>> {
    ConcurrencyAnalyzer::default().analyze(calls)
}
