//! Formatting utilities for the report output.

/// Zero-padded HH:MM, used for the per-session duration column.
pub fn mins2hhmm(mins: i64) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Unpadded H:M, used for the summary totals.
pub fn mins2hm(mins: i64) -> String {
    format!("{}:{}", mins / 60, mins % 60)
}
