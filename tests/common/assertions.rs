//! Domain-specific assertion macros for cookielog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* stage of the pipeline rejected or mis-reported an
//! input.

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

/// Assert that a result is `Err(Error::InvalidFormat { .. })`.
///
/// ```rust
/// assert_invalid_format!(validate_date("17-01-08"));
/// ```
#[macro_export]
macro_rules! assert_invalid_format {
    ($result:expr) => {{
        match $result {
            Err(cookielog_core::Error::InvalidFormat { .. }) => {}
            Err(other) => panic!(
                "assert_invalid_format! failed: wrong error kind.\n  actual: {:?}",
                other
            ),
            Ok(value) => panic!(
                "assert_invalid_format! failed: expected an error, got Ok({:?})",
                value
            ),
        }
    }};
}

/// Assert that a result is `Err(Error::FileNotFound { .. })`.
#[macro_export]
macro_rules! assert_file_not_found {
    ($result:expr) => {{
        match $result {
            Err(cookielog_core::Error::FileNotFound { .. }) => {}
            Err(other) => panic!(
                "assert_file_not_found! failed: wrong error kind.\n  actual: {:?}",
                other
            ),
            Ok(value) => panic!(
                "assert_file_not_found! failed: expected an error, got Ok({:?})",
                value
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Winner assertions
// ---------------------------------------------------------------------------

/// Assert that a `WinnerSet` holds exactly the expected cookies, in order.
///
/// ```rust
/// assert_winners!(winners, ["A", "B"]);
/// ```
#[macro_export]
macro_rules! assert_winners {
    ($winners:expr, [$($cookie:expr),* $(,)?]) => {{
        let winners: &cookielog_core::WinnerSet = &$winners;
        let expected: Vec<&str> = vec![$($cookie),*];
        let actual: Vec<&str> = winners.iter().map(String::as_str).collect();
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_winners! failed (winning count {})",
            winners.count()
        );
    }};
}

// ---------------------------------------------------------------------------
// Report helpers
// ---------------------------------------------------------------------------

/// Split reporter output into its lines, asserting every line is terminated.
pub fn report_lines(output: &[u8]) -> Vec<String> {
    let text = std::str::from_utf8(output).expect("report output must be UTF-8");
    assert!(
        text.is_empty() || text.ends_with('\n'),
        "report output must end with a newline: {text:?}"
    );
    text.lines().map(str::to_string).collect()
}
