//! Core types for cookielog-core.
//!
//! This module defines the data that flows between pipeline stages: the
//! parsed [`LogRecord`], the caller-supplied [`TargetDate`], and the
//! [`WinnerSet`] produced by the reducer.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// One data row of a cookie log: `<cookie>,<timestamp>`.
///
/// Built by [`LogRecord::parse_line`](crate::extract) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Opaque identifier. Never empty.
    pub cookie: String,
    /// Offset-aware timestamp exactly as written in the file.
    pub timestamp: DateTime<FixedOffset>,
}

impl LogRecord {
    /// Calendar date as encoded in the row, in the row's own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// The day being queried. Only obtainable through
/// [`validate_date`](crate::validate::validate_date) or [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// True when `record` was logged on this day, comparing the literal
    /// local date and ignoring time-of-day and offset.
    pub fn contains(&self, record: &LogRecord) -> bool {
        record.local_date() == self.0
    }
}

impl std::str::FromStr for TargetDate {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validate::validate_date(s)
    }
}

impl std::fmt::Display for TargetDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Every cookie sharing the highest count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinnerSet {
    cookies: Vec<String>,
    count: usize,
}

impl WinnerSet {
    pub(crate) fn new(cookies: Vec<String>, count: usize) -> Self {
        Self { cookies, count }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Occurrences of each winner. Zero for an empty set.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cookies(&self) -> &[String] {
        &self.cookies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.cookies.iter()
    }
}

impl<'a> IntoIterator for &'a WinnerSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}
