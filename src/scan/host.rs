//! Generic line-oriented scanner host.
//!
//! The host owns iteration, cancellation and result collection. A
//! [`LineParser`] decides which lines it cares about and turns those into
//! annotations.

use crate::annotation::Annotation;
use crate::error::{DiffScanError, Result};

use super::cancel::CancelToken;

/// A parser the host can drive one line at a time.
pub trait LineParser {
    /// Cheap per-line filter. May update parser state as a side effect; it
    /// is called for every line, in order.
    fn is_line_interesting(&mut self, line: &str) -> bool;

    /// Turn one interesting line into zero or more annotations appended to `out`.
    fn parse_line(&mut self, line: &str, out: &mut Vec<Annotation>);
}

/// Counters for one pass of [`scan_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines handed to the parser.
    pub lines: usize,
    /// Lines the parser found interesting.
    pub interesting: usize,
    /// Annotations appended to the output.
    pub annotations: usize,
}

/// Feed `lines` through `parser`, appending annotations to `out`.
///
/// `cancel` is checked before each line. Once it is set the scan stops
/// without looking at that line and returns
/// [`DiffScanError::ScanCanceled`]; annotations already appended stay in
/// `out`.
pub fn scan_lines<P, I, S>(
    parser: &mut P,
    lines: I,
    cancel: &CancelToken,
    out: &mut Vec<Annotation>,
) -> Result<ScanStats>
where
    P: LineParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let first = out.len();
    let mut stats = ScanStats::default();

    for (index, line) in lines.into_iter().enumerate() {
        if cancel.is_canceled() {
            let emitted = out.len() - first;
            log::warn!(
                "scan canceled before line {} ({} annotations emitted)",
                index + 1,
                emitted
            );
            return Err(DiffScanError::ScanCanceled {
                line: index + 1,
                emitted,
            });
        }

        let line = line.as_ref();
        stats.lines += 1;
        if parser.is_line_interesting(line) {
            stats.interesting += 1;
            parser.parse_line(line, out);
        }
    }

    stats.annotations = out.len() - first;
    Ok(stats)
}
