//! Unified diff scanning.

use crate::annotation::{Annotation, ChangeRecordBuilder};
use crate::config::Config;
use crate::diff::{HeaderState, classify, match_hunk_header};
use crate::error::Result;

use super::cancel::CancelToken;
use super::host::{LineParser, ScanStats, scan_lines};

/// Turns unified diff text into (record, mirror) annotation pairs.
///
/// The parser remembers the most recent `---`/`+++` file names between
/// lines. [`UnifiedDiffParser::scan_into`] starts every scan from a clean
/// state; driving the parser through [`scan_lines`] directly keeps state
/// across calls, which lets a host feed one diff in several chunks.
#[derive(Debug, Clone, Default)]
pub struct UnifiedDiffParser {
    state: HeaderState,
    builder: ChangeRecordBuilder,
    next_key: u64,
}

impl UnifiedDiffParser {
    pub fn new(builder: ChangeRecordBuilder) -> Self {
        Self {
            state: HeaderState::new(),
            builder,
            next_key: 0,
        }
    }

    /// Parser using the configured message template and priority.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ChangeRecordBuilder::from_config(config)?))
    }

    /// The file names the next hunk would be attributed to.
    pub fn header_state(&self) -> &HeaderState {
        &self.state
    }

    /// Scan `lines` from a clean state, appending annotations to `out`.
    ///
    /// # Returns
    ///
    /// * `Ok(ScanStats)` - All lines were scanned
    /// * `Err(DiffScanError::ScanCanceled)` - `cancel` was set; the pairs
    ///   emitted before that point remain in `out`
    pub fn scan_into<I, S>(
        &mut self,
        lines: I,
        cancel: &CancelToken,
        out: &mut Vec<Annotation>,
    ) -> Result<ScanStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        let stats = scan_lines(self, lines, cancel, out)?;
        log::info!(
            "scanned {} lines: {} hunk header candidates, {} annotations",
            stats.lines,
            stats.interesting,
            stats.annotations
        );
        Ok(stats)
    }

    /// Scan `lines` from a clean state and return the annotations.
    ///
    /// On cancellation only the error is returned; use
    /// [`UnifiedDiffParser::scan_into`] to keep partial results.
    ///
    /// # Examples
    ///
    /// ```
    /// use diffscan::annotation::FileAnnotation;
    /// use diffscan::scan::{CancelToken, UnifiedDiffParser};
    ///
    /// let lines = ["--- a.txt\t2020", "+++ b.txt\t2020", "@@ -1,3 +1,4 @@ context"];
    /// let annotations = UnifiedDiffParser::default()
    ///     .scan(lines, &CancelToken::new())
    ///     .unwrap();
    ///
    /// assert_eq!(annotations.len(), 2);
    /// assert_eq!(annotations[0].file_name(), "a.txt");
    /// assert_eq!(annotations[1].file_name(), "b.txt");
    /// ```
    pub fn scan<I, S>(&mut self, lines: I, cancel: &CancelToken) -> Result<Vec<Annotation>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        self.scan_into(lines, cancel, &mut out)?;
        Ok(out)
    }

    fn reset(&mut self) {
        self.state = HeaderState::new();
        self.next_key = 0;
    }
}

impl LineParser for UnifiedDiffParser {
    fn is_line_interesting(&mut self, line: &str) -> bool {
        classify(line, &mut self.state).is_hunk_candidate()
    }

    fn parse_line(&mut self, line: &str, out: &mut Vec<Annotation>) {
        let Some(hunk) = match_hunk_header(line) else {
            log::debug!("skipping line that is not a hunk header: {}", line);
            return;
        };

        self.builder.build_into(
            &hunk,
            self.state.old_file_name.as_deref(),
            self.state.new_file_name.as_deref(),
            self.next_key,
            out,
        );
        self.next_key += 1;
    }
}

/// Scan a whole diff held in memory with default settings.
pub fn scan_diff(text: &str, cancel: &CancelToken) -> Result<Vec<Annotation>> {
    UnifiedDiffParser::default().scan(text.lines(), cancel)
}
