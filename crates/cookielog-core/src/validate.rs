//! Input validator. Gates the pipeline before any row is extracted.
//!
//! [`validate_date`] checks the shape *and* the calendar value of the target
//! date. [`validate_file`] checks that the path is a regular file, that the
//! header is exactly [`HEADER`], and that the first data row (if any) carries
//! a well-shaped timestamp.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::extract::trim_line_end;
use crate::{Error, Result, TargetDate};

/// The only accepted first line of a cookie log.
pub const HEADER: &str = "cookie,timestamp";

/// Length of `YYYY-MM-DDTHH:MM:SS±HH:MM`.
pub const TIMESTAMP_LEN: usize = 25;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex"));

static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}[+-][0-9]{2}:[0-9]{2}$")
        .expect("timestamp shape regex")
});

/// Parse `text` as a `YYYY-MM-DD` calendar date.
///
/// The shape check alone is not enough: `9999-99-99` has the right shape and
/// is still rejected by the calendar parse.
pub fn validate_date(text: &str) -> Result<TargetDate> {
    if text.len() != 10 || !DATE_SHAPE.is_match(text) {
        return Err(Error::invalid_argument("date (expected YYYY-MM-DD)", text));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(TargetDate::new)
        .map_err(|_| Error::invalid_argument("calendar date", text))
}

/// Check that `path` looks like a cookie log without reading past its first
/// data row.
///
/// A file holding only the header is accepted: it simply has no rows for
/// any date.
pub fn validate_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();

    reader.read_line(&mut line).map_err(|e| Error::io(path, e))?;
    let header = trim_line_end(&line);
    if header != HEADER {
        return Err(Error::invalid_file("file header", header));
    }

    line.clear();
    let read = reader.read_line(&mut line).map_err(|e| Error::io(path, e))?;
    if read == 0 {
        tracing::debug!(path = %path.display(), "log has a header but no data rows");
        return Ok(());
    }
    check_row_shape(trim_line_end(&line))
}

fn check_row_shape(row: &str) -> Result<()> {
    let timestamp = match row.split_once(',') {
        Some((_, timestamp)) => timestamp,
        None => return Err(Error::invalid_file("first data row", row)),
    };
    if !is_timestamp_shape(timestamp) {
        return Err(Error::invalid_file("timestamp", timestamp));
    }
    Ok(())
}

/// True when `text` is exactly `YYYY-MM-DDTHH:MM:SS±HH:MM`.
pub(crate) fn is_timestamp_shape(text: &str) -> bool {
    text.len() == TIMESTAMP_LEN && TIMESTAMP_SHAPE.is_match(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
