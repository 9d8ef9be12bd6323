//! Line classification and the file-name state carried between lines.

/// Prefix of the line naming the pre-change file.
pub const OLD_FILE_PREFIX: &str = "--- ";

/// Prefix of the line naming the post-change file.
pub const NEW_FILE_PREFIX: &str = "+++ ";

/// Prefix shared by every hunk header.
pub const HUNK_PREFIX: &str = "@@";

/// What a single raw input line is, as far as the scanner cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `--- <old file>\t...`
    OldFileMarker,
    /// `+++ <new file>\t...`
    NewFileMarker,
    /// Starts with `@@`; may or may not turn out to be a valid hunk header.
    HunkHeaderCandidate,
    /// Everything else, including hunk bodies.
    Irrelevant,
}

impl LineKind {
    /// Only hunk header candidates are handed on to the hunk matcher.
    pub fn is_hunk_candidate(self) -> bool {
        self == LineKind::HunkHeaderCandidate
    }
}

/// The most recently seen old/new file names.
///
/// One instance lives for the duration of a single scan. Each field is only
/// replaced when a marker line of its own kind carries a name, so names
/// survive across hunks and across marker lines without a tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub old_file_name: Option<String>,
    pub new_file_name: Option<String>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Classify `line` and update `state` from file marker lines.
///
/// A marker line only updates the file name when its first tab sits after
/// the four-character prefix; the name is the text between the prefix and
/// that tab.
///
/// # Examples
///
/// ```
/// use diffscan::diff::{classify, HeaderState, LineKind};
///
/// let mut state = HeaderState::new();
/// assert_eq!(classify("--- a.txt\t2020-01-01", &mut state), LineKind::OldFileMarker);
/// assert_eq!(state.old_file_name.as_deref(), Some("a.txt"));
/// assert_eq!(classify("@@ -1 +1 @@", &mut state), LineKind::HunkHeaderCandidate);
/// assert_eq!(classify(" context", &mut state), LineKind::Irrelevant);
/// ```
pub fn classify(line: &str, state: &mut HeaderState) -> LineKind {
    if line.starts_with(OLD_FILE_PREFIX) {
        if let Some(name) = marker_file_name(line) {
            log::debug!("old file: {}", name);
            state.old_file_name = Some(name.to_string());
        }
        return LineKind::OldFileMarker;
    }

    if line.starts_with(NEW_FILE_PREFIX) {
        if let Some(name) = marker_file_name(line) {
            log::debug!("new file: {}", name);
            state.new_file_name = Some(name.to_string());
        }
        return LineKind::NewFileMarker;
    }

    if line.starts_with(HUNK_PREFIX) {
        return LineKind::HunkHeaderCandidate;
    }

    LineKind::Irrelevant
}

/// Both marker prefixes are four ASCII bytes long.
fn marker_file_name(line: &str) -> Option<&str> {
    let prefix_len = OLD_FILE_PREFIX.len();
    match line.find('\t') {
        Some(tab) if tab > prefix_len => Some(&line[prefix_len..tab]),
        _ => None,
    }
}
