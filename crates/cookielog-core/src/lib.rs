//! cookielog-core: the most-active-cookie pipeline.
//!
//! This crate exposes the three pipeline stages as public modules, plus the
//! shared types and the error taxonomy used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Validator ──► Extractor ──► Reducer ──► (Reporter, in the binary)
//! ```
//!
//! Every stage is synchronous and stateless; nothing outlives a single run.

pub mod config;
pub mod error;
pub mod extract;
pub mod reduce;
pub mod types;
pub mod validate;

pub use error::{Error, FormatOrigin, Result};
pub use extract::get_date_cookies;
pub use reduce::{find_most_active, FrequencyTable};
pub use types::{LogRecord, TargetDate, WinnerSet};
pub use validate::{validate_date, validate_file};
