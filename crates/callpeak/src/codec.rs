//! JSON boundary for call records, results, and day segments.
//!
//! Input is accepted either wrapped as `{"callRecords": [...]}` or as a bare
//! array. Results are always written wrapped as `{"results": [...]}`. Output
//! formatting is controlled by an explicit [`CodecConfig`] value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{CallRecord, ResultEntry};
use crate::splitter::DaySegment;

/// Output formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Pretty-print JSON output instead of writing it on one line.
    pub pretty: bool,
}

impl CodecConfig {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CallRecordsInput {
    Wrapped {
        #[serde(rename = "callRecords")]
        call_records: Vec<CallRecord>,
    },
    Bare(Vec<CallRecord>),
}

#[derive(Serialize)]
struct ResultsEnvelope<'a> {
    results: &'a [ResultEntry],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentDto<'a> {
    customer_id: i64,
    call_id: &'a str,
    date: NaiveDate,
    start_timestamp: i64,
    end_timestamp: i64,
}

#[derive(Serialize)]
struct SegmentsEnvelope<'a> {
    segments: Vec<SegmentDto<'a>>,
}

/// Decode call records from JSON.
///
/// # Errors
/// Returns `PeakError::Json` if the input is neither a `callRecords` envelope
/// nor an array of call records.
pub fn decode_call_records(json: &str) -> Result<Vec<CallRecord>> {
    let records = match serde_json::from_str::<CallRecordsInput>(json)? {
        CallRecordsInput::Wrapped { call_records } => call_records,
        CallRecordsInput::Bare(records) => records,
    };
    Ok(records)
}

/// Encode result entries as a `{"results": [...]}` document.
pub fn encode_results(results: &[ResultEntry], config: &CodecConfig) -> Result<String> {
    to_json(&ResultsEnvelope { results }, config)
}

/// Encode day segments as a `{"segments": [...]}` document, each labelled with its date.
///
/// # Errors
/// Returns `PeakError::TimestampOutOfRange` if a segment's day has no calendar date.
pub fn encode_segments(segments: &[DaySegment], config: &CodecConfig) -> Result<String> {
    let segments = segments
        .iter()
        .map(|s| {
            Ok(SegmentDto {
                customer_id: s.customer_id,
                call_id: &s.call_id,
                date: s.date()?,
                start_timestamp: s.start_timestamp,
                end_timestamp: s.end_timestamp,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    to_json(&SegmentsEnvelope { segments }, config)
}

fn to_json<T: Serialize>(value: &T, config: &CodecConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
