//! Record loader: groups raw input lines into triples and emits one
//! SessionRecord per completed triple.

use crate::core::timestamp::read_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::models::timestamp::Timestamp;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Read `path` and parse its session records, in file order.
///
/// Lines repeat in groups of three: a header/separator line (ignored),
/// a start line carrying the session id and start timestamp, and an end
/// line carrying the end timestamp. A trailing incomplete group emits no
/// record and is not an error.
pub fn load_records(path: &str) -> AppResult<Vec<SessionRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut pending: Option<(String, Timestamp)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        match idx % 3 {
            1 => {
                let id = session_id(&line, line_no)?;
                let start = read_timestamp(&line, line_no)?;
                pending = Some((id, start));
            }
            2 => {
                let end = read_timestamp(&line, line_no)?;
                if let Some((id, start)) = pending.take() {
                    records.push(SessionRecord { id, start, end });
                }
            }
            _ => {} // header/separator line
        }
    }

    Ok(records)
}

/// The session id is the leading token of a start line: everything up
/// to the first space. A start line with no space, or with nothing
/// before it, is malformed.
pub fn session_id(line: &str, line_no: usize) -> AppResult<String> {
    match line.split_once(' ') {
        Some((id, _)) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AppError::MalformedLine(
            line_no,
            "missing space-delimited session id".to_string(),
        )),
    }
}
