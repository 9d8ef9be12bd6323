//! Hunk range tokens.

use crate::error::{DiffScanError, Result};
use serde::Serialize;
use std::fmt;

/// An inclusive, 1-based interval of line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Create a range covering `start..=end`.
    ///
    /// The bounds are swapped if given in the wrong order so that
    /// `start <= end` always holds.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Parse a hunk range token of the form `N` or `N,M`.
///
/// The leading `-`/`+` of the hunk header must already be stripped.
///
/// - `N` yields the single-line range `[N, N]`.
/// - `N,M` yields `[N, N + M]`. Note that this is one line longer than the
///   `M` lines a unified diff actually describes; the exact value is kept
///   because downstream consumers key on it.
///
/// # Errors
///
/// Returns [`DiffScanError::MalformedRange`] if either number is missing,
/// is not a non-negative integer, or if `N + M` overflows.
///
/// # Examples
///
/// ```
/// use diffscan::diff::{parse_range, LineRange};
///
/// assert_eq!(parse_range("7").unwrap(), LineRange::single(7));
/// assert_eq!(parse_range("10,3").unwrap(), LineRange::new(10, 13));
/// assert!(parse_range("x").is_err());
/// ```
pub fn parse_range(token: &str) -> Result<LineRange> {
    match token.split_once(',') {
        None => {
            let line = parse_number(token, token)?;
            Ok(LineRange::single(line))
        }
        Some((start, count)) => {
            let start = parse_number(start, token)?;
            let count = parse_number(count, token)?;
            let end = start
                .checked_add(count)
                .ok_or_else(|| DiffScanError::malformed_range(token, "range end overflows"))?;
            Ok(LineRange::new(start, end))
        }
    }
}

fn parse_number(digits: &str, token: &str) -> Result<usize> {
    // `usize::from_str` accepts a leading '+', which is not part of the grammar.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiffScanError::malformed_range(
            token,
            format!("'{}' is not a non-negative integer", digits),
        ));
    }

    digits
        .parse()
        .map_err(|e| DiffScanError::malformed_range(token, format!("{}", e)))
}
