//! Fixed-offset timestamp extraction.
//!
//! The timestamp occupies a constant-width suffix of each line, so every
//! field is read by indexing backward from the line end rather than by
//! scanning or splitting. The parse is O(1) per line and insensitive to
//! whatever variable-length text precedes the timestamp.

use crate::errors::{AppError, AppResult};
use crate::models::timestamp::Timestamp;

// Distances counted backward from the effective line length (which
// includes the trailing newline).
const AM_OFFSET: usize = 3;
const MIN_OFFSET: usize = 6;
const HOUR_OFFSET: usize = 9;
const DAY_OFFSET: usize = 12;
const MONTH_OFFSET: usize = 15;
const YEAR_OFFSET: usize = 20;

/// Extract the timestamp embedded at the tail of `line`.
///
/// `line_no` is 1-based and used only in error messages. The offsets
/// assume the line still carries its trailing newline; a line without
/// one (e.g. stripped by `BufRead::lines`) is treated as one byte
/// longer. A line too short for the fields, a non-digit byte in a digit
/// position, or an out-of-range field value all fail with MalformedLine
/// instead of indexing out of bounds.
pub fn read_timestamp(line: &str, line_no: usize) -> AppResult<Timestamp> {
    let bytes = line.as_bytes();
    let len = if bytes.last() == Some(&b'\n') {
        bytes.len()
    } else {
        bytes.len() + 1
    };

    if len < YEAR_OFFSET {
        return Err(AppError::MalformedLine(
            line_no,
            "line too short for timestamp fields".to_string(),
        ));
    }

    let year = digit(bytes, len - YEAR_OFFSET, line_no)? as i32 * 1000
        + digit(bytes, len - YEAR_OFFSET + 1, line_no)? as i32 * 100
        + digit(bytes, len - YEAR_OFFSET + 2, line_no)? as i32 * 10
        + digit(bytes, len - YEAR_OFFSET + 3, line_no)? as i32;

    let month = two_digits(bytes, len - MONTH_OFFSET, line_no)?;
    let day = two_digits(bytes, len - DAY_OFFSET, line_no)?;
    let hour = two_digits(bytes, len - HOUR_OFFSET, line_no)?;
    let minute = two_digits(bytes, len - MIN_OFFSET, line_no)?;

    // 'P' marks the afternoon half; anything else counts as morning
    let afternoon = bytes[len - AM_OFFSET] == b'P';

    Timestamp::from_clock(year, month, day, hour, minute, afternoon)
        .ok_or_else(|| AppError::MalformedLine(line_no, "timestamp field out of range".to_string()))
}

fn digit(bytes: &[u8], idx: usize, line_no: usize) -> AppResult<u32> {
    let b = bytes[idx];
    if b.is_ascii_digit() {
        Ok((b - b'0') as u32)
    } else {
        Err(AppError::MalformedLine(
            line_no,
            format!("expected a digit, found {:?}", b as char),
        ))
    }
}

fn two_digits(bytes: &[u8], idx: usize, line_no: usize) -> AppResult<u32> {
    Ok(digit(bytes, idx, line_no)? * 10 + digit(bytes, idx + 1, line_no)?)
}
