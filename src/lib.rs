//! cookielog: find the most active cookie for a given day.
//!
//! This crate wires the [`cookielog_core`] stages into a single run and owns
//! the reporter, so that integration tests can drive the whole pipeline
//! without spawning the binary.
//!
//! # Architecture
//!
//! ```text
//! validate_date ─┐
//! validate_file ─┴──► get_date_cookies ──► find_most_active ──► report
//! ```

use std::io::Write;
use std::path::PathBuf;

pub use cookielog_core::{Error, Result, WinnerSet};

/// Inputs of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file: PathBuf,
    pub date: String,
}

/// Validate the inputs, extract the day's cookies, and report the winners to
/// `out`. Nothing is written unless every stage succeeded.
pub fn run(args: &Args, out: impl Write) -> Result<()> {
    let target = cookielog_core::validate_date(&args.date)?;
    cookielog_core::validate_file(&args.file)?;

    let cookies = cookielog_core::get_date_cookies(&args.file, target)?;
    let winners = cookielog_core::find_most_active(&cookies);
    tracing::info!(
        file = %args.file.display(),
        date = %target,
        matched = cookies.len(),
        winners = winners.len(),
        "analysis complete"
    );

    report(&winners, out).map_err(|e| Error::io("<stdout>", e))
}

/// Write each winner on its own line. An empty set writes nothing.
pub fn report(winners: &WinnerSet, mut out: impl Write) -> std::io::Result<()> {
    for cookie in winners {
        writeln!(out, "{cookie}")?;
    }
    out.flush()
}

/// One-line message for stderr, prefixed by the kind of failure.
pub fn describe(err: &Error) -> String {
    if err.is_value_error() {
        format!("Value Error: {err}")
    } else {
        format!("Runtime Error: {err}")
    }
}

/// Process exit status for a failed run.
pub fn exit_code(err: &Error) -> u8 {
    if err.is_value_error() {
        2
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
