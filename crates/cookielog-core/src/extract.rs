//! Date-filtered extractor. Collects the cookies logged on one day.
//!
//! The whole file is scanned once and the matching cookies are returned as a
//! fully materialised `Vec`, in file order. A row that cannot be parsed
//! aborts the scan; there is no per-row recovery.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::validate::is_timestamp_shape;
use crate::{Error, LogRecord, Result, TargetDate};

/// chrono format of the timestamp column: `YYYY-MM-DDTHH:MM:SS±HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

impl LogRecord {
    /// Parse one data row. `line_no` is 1-based and only used for errors.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let line = trim_line_end(line);
        let mut fields = line.split(',');
        let (cookie, timestamp) = match (fields.next(), fields.next(), fields.next()) {
            (Some(cookie), Some(timestamp), None) => (cookie, timestamp),
            _ => {
                let found = line.split(',').count();
                return Err(Error::parse(
                    line_no,
                    format!("expected 2 fields, found {found}"),
                ));
            }
        };
        if cookie.is_empty() {
            return Err(Error::parse(line_no, "empty cookie"));
        }
        if !is_timestamp_shape(timestamp) {
            return Err(Error::parse(
                line_no,
                format!("timestamp {timestamp:?} is not YYYY-MM-DDTHH:MM:SS±HH:MM"),
            ));
        }
        let timestamp = DateTime::<FixedOffset>::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| Error::parse(line_no, format!("bad timestamp {timestamp:?}: {e}")))?;

        Ok(Self {
            cookie: cookie.to_string(),
            timestamp,
        })
    }
}

/// Every cookie in the log at `path` whose row falls on `target`.
pub fn get_date_cookies(path: impl AsRef<Path>, target: TargetDate) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    date_cookies(BufReader::new(file), target).map_err(|err| match err {
        Error::Io { source, .. } => Error::io(path, source),
        other => other,
    })
}

/// Same as [`get_date_cookies`] over any buffered reader. The first line is
/// taken to be the header and is skipped without being checked.
pub fn date_cookies(reader: impl BufRead, target: TargetDate) -> Result<Vec<String>> {
    let mut cookies = Vec::new();
    let mut scanned = 0usize;

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| Error::io("<reader>", e))?;
        let record = LogRecord::parse_line(&line, idx + 1)?;
        scanned += 1;
        if target.contains(&record) {
            cookies.push(record.cookie);
        }
    }

    tracing::debug!(date = %target, scanned, matched = cookies.len(), "extracted cookies");
    Ok(cookies)
}

/// Strip one trailing `\n` or `\r\n`.
pub(crate) fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
