//! Hunk header grammar.

use regex::Regex;
use std::sync::LazyLock;

use super::range::{LineRange, parse_range};

/// One range token: digits, optionally followed by a comma and more digits.
const RANGE: &str = r"\d+,?\d*";

// `\s` is ASCII-only and the section text stops at any line terminator.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^@@ -({RANGE}) \+({RANGE}) @@(?:(?-u:\s)([^\r\n]*))?$");
    Regex::new(&pattern).expect("Invalid hunk header regex")
});

/// A parsed `@@ -old +new @@ section` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_range: LineRange,
    pub new_range: LineRange,
    /// Text after the closing `@@` and one whitespace character, verbatim.
    ///
    /// `None` when the header ends at `@@`; `Some("")` when only the
    /// separating whitespace follows.
    pub section_text: Option<String>,
}

/// Match a hunk header candidate against the full header grammar.
///
/// Returns `None` when the line does not match, including when a range
/// token is syntactically accepted by the grammar but is not a valid range
/// (for example `1,` or a number too large to represent).
///
/// One trailing `\n`, `\r\n` or `\r` is ignored, so hosts may pass raw lines.
///
/// # Examples
///
/// ```
/// use diffscan::diff::{match_hunk_header, LineRange};
///
/// let hunk = match_hunk_header("@@ -1,3 +1,4 @@ fn main() {").unwrap();
/// assert_eq!(hunk.old_range, LineRange::new(1, 4));
/// assert_eq!(hunk.new_range, LineRange::new(1, 5));
/// assert_eq!(hunk.section_text.as_deref(), Some("fn main() {"));
///
/// assert!(match_hunk_header("@@ garbage @@").is_none());
/// ```
pub fn match_hunk_header(line: &str) -> Option<HunkHeader> {
    let captures = HUNK_HEADER_REGEX.captures(strip_line_terminator(line))?;

    let old_token = captures.get(1)?.as_str();
    let new_token = captures.get(2)?.as_str();

    let old_range = range_or_skip(old_token, line)?;
    let new_range = range_or_skip(new_token, line)?;

    Some(HunkHeader {
        old_range,
        new_range,
        section_text: captures.get(3).map(|m| m.as_str().to_string()),
    })
}

fn range_or_skip(token: &str, line: &str) -> Option<LineRange> {
    match parse_range(token) {
        Ok(range) => Some(range),
        Err(e) => {
            log::debug!("skipping hunk header '{}': {}", line, e);
            None
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
