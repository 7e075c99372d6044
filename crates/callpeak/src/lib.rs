//! # callpeak
//!
//! Peak concurrent calls per customer per UTC calendar day.
//!
//! Given call detail records (customer, call id, start and end in epoch
//! milliseconds), callpeak splits every call at UTC midnights and reports, for
//! each customer and day, the highest number of calls active at once, the
//! instant that peak is first reached, and the calls active at that instant.
//! Intervals are half-open: a call ending at `t` is not concurrent with a call
//! starting at `t`.
//!
//! ```rust
//! use callpeak::{analyze, CallRecord};
//!
//! let calls = vec![
//!     CallRecord::new(1, "a", 1_000, 3_000),
//!     CallRecord::new(1, "b", 2_000, 4_000),
//! ];
//! let results = analyze(&calls).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].max_concurrent_calls, 2);
//! assert_eq!(results[0].timestamp, Some(2_000));
//! assert_eq!(results[0].call_ids, vec!["a", "b"]);
//! ```
//!
//! ## Modules
//!
//! - [`record`] - `CallRecord` input and `ResultEntry` output types
//! - [`splitter`] - Split a call into per-UTC-day segments
//! - [`analyzer`] - Peak concurrency per customer per day, with tie-break policy
//! - [`codec`] - JSON decoding/encoding of records, results, and segments
//! - [`error`] - Error types

pub mod analyzer;
pub mod codec;
pub mod error;
pub mod record;
pub mod splitter;

pub use analyzer::{analyze, ConcurrencyAnalyzer, TieBreak};
pub use codec::{decode_call_records, encode_results, encode_segments, CodecConfig};
pub use error::PeakError;
pub use record::{CallRecord, ResultEntry};
pub use splitter::{split_by_day, DaySegment};
