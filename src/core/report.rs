//! Per-session duration and aggregate report computation.

use crate::models::session::SessionRecord;
use crate::models::timestamp::Timestamp;
use chrono::Timelike;

/// Aggregate statistics over a whole run.
#[derive(Debug, Default, Clone)]
pub struct Report {
    pub total_sessions: usize,
    pub total_minutes: i64,
    pub average_minutes: i64,
}

/// Minutes between start and end, using clock time only.
///
/// An end hour numerically below the start hour means the session
/// crossed midnight, so the end gets a day's worth of hours added
/// before the subtraction. Date fields are deliberately ignored:
/// sessions are assumed to span at most one midnight.
pub fn session_minutes(start: &Timestamp, end: &Timestamp) -> i64 {
    let start_hour = start.time.hour() as i64;
    let mut end_hour = end.time.hour() as i64;

    if start_hour > end_hour {
        end_hour += 24;
    }

    (end_hour * 60 + end.time.minute() as i64) - (start_hour * 60 + start.time.minute() as i64)
}

/// One pass over all records: count, sum, truncating average.
pub fn build_report(records: &[SessionRecord]) -> Report {
    let total_sessions = records.len();
    let total_minutes: i64 = records
        .iter()
        .map(|r| session_minutes(&r.start, &r.end))
        .sum();

    // an empty run must not divide by zero
    let average_minutes = if total_sessions == 0 {
        0
    } else {
        total_minutes / total_sessions as i64
    };

    Report {
        total_sessions,
        total_minutes,
        average_minutes,
    }
}
