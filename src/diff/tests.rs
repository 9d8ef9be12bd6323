//! Tests for diff primitives.

use crate::error::DiffScanError;

use super::{HeaderState, LineKind, LineRange, classify, match_hunk_header, parse_range};

// =========================================================================
// Range parsing
// =========================================================================

#[test]
fn test_single_number_is_single_line_range() {
    for n in [0, 1, 42, 100_000] {
        let range = parse_range(&n.to_string()).unwrap();
        assert_eq!(range, LineRange { start: n, end: n });
    }
}

/// `N,M` yields `end = N + M`, which is one past the last line a unified
/// diff describes (`N + M - 1`). The value is pinned here on purpose:
/// consumers of the emitted ranges depend on it.
#[test]
fn test_count_is_added_to_start() {
    let cases = [("1,3", 1, 4), ("10,0", 10, 10), ("0,0", 0, 0), ("5,1", 5, 6)];

    for (token, start, end) in cases {
        let range = parse_range(token).unwrap();
        assert_eq!(range, LineRange { start, end }, "token {}", token);
    }
}

#[test]
fn test_non_integer_tokens_are_malformed() {
    for token in ["", "x", "1,x", "a,1", "1,", ",3", "-1", "1,-2", "1.5", "1,2,3", " 1"] {
        let result = parse_range(token);
        assert!(
            matches!(result, Err(DiffScanError::MalformedRange { .. })),
            "expected MalformedRange for {:?}, got {:?}",
            token,
            result
        );
    }
}

#[test]
fn test_overflow_is_malformed() {
    let token = format!("{},1", usize::MAX);
    assert!(matches!(
        parse_range(&token),
        Err(DiffScanError::MalformedRange { .. })
    ));

    let token = "99999999999999999999999999999";
    assert!(matches!(
        parse_range(token),
        Err(DiffScanError::MalformedRange { .. })
    ));
}

#[test]
fn test_malformed_range_reports_token() {
    let err = parse_range("7,zz").unwrap_err();
    match err {
        DiffScanError::MalformedRange { token, .. } => assert_eq!(token, "7,zz"),
        other => panic!("unexpected error: {:?}", other),
    }
}

// =========================================================================
// Line classification
// =========================================================================

#[test]
fn test_old_marker_with_tab_sets_old_name() {
    let mut state = HeaderState::new();

    let kind = classify("--- src/old.rs\t2020-01-01 00:00:00", &mut state);

    assert_eq!(kind, LineKind::OldFileMarker);
    assert_eq!(state.old_file_name.as_deref(), Some("src/old.rs"));
    assert_eq!(state.new_file_name, None);
}

#[test]
fn test_new_marker_with_tab_sets_new_name() {
    let mut state = HeaderState::new();

    let kind = classify("+++ src/new.rs\t2020-01-02", &mut state);

    assert_eq!(kind, LineKind::NewFileMarker);
    assert_eq!(state.new_file_name.as_deref(), Some("src/new.rs"));
    assert_eq!(state.old_file_name, None);
}

#[test]
fn test_marker_without_tab_keeps_previous_name() {
    let mut state = HeaderState::new();
    classify("--- first.txt\tx", &mut state);

    // git-style markers carry no tab and leave the name untouched
    let kind = classify("--- a/second.txt", &mut state);

    assert_eq!(kind, LineKind::OldFileMarker);
    assert_eq!(state.old_file_name.as_deref(), Some("first.txt"));
}

#[test]
fn test_marker_with_tab_right_after_prefix_is_ignored() {
    let mut state = HeaderState::new();

    classify("--- \tstamp", &mut state);
    classify("+++ \tstamp", &mut state);

    assert_eq!(state, HeaderState::new());
}

#[test]
fn test_name_stops_at_first_tab() {
    let mut state = HeaderState::new();

    classify("+++ name with spaces.txt\tdate\tmore", &mut state);

    assert_eq!(state.new_file_name.as_deref(), Some("name with spaces.txt"));
}

#[test]
fn test_markers_need_trailing_space() {
    let mut state = HeaderState::new();

    assert_eq!(classify("---a.txt\tx", &mut state), LineKind::Irrelevant);
    assert_eq!(classify("+++b.txt\tx", &mut state), LineKind::Irrelevant);
    assert_eq!(state, HeaderState::new());
}

#[test]
fn test_hunk_candidates_and_irrelevant_lines() {
    let mut state = HeaderState::new();

    assert_eq!(
        classify("@@ -1 +1 @@", &mut state),
        LineKind::HunkHeaderCandidate
    );
    assert_eq!(
        classify("@@ garbage @@", &mut state),
        LineKind::HunkHeaderCandidate
    );
    assert_eq!(classify("@", &mut state), LineKind::Irrelevant);
    assert_eq!(classify("+added", &mut state), LineKind::Irrelevant);
    assert_eq!(classify("-removed", &mut state), LineKind::Irrelevant);
    assert_eq!(classify(" context", &mut state), LineKind::Irrelevant);
    assert_eq!(classify("", &mut state), LineKind::Irrelevant);
    assert_eq!(state, HeaderState::new());
}

#[test]
fn test_only_hunk_candidates_reach_matching() {
    assert!(LineKind::HunkHeaderCandidate.is_hunk_candidate());
    assert!(!LineKind::OldFileMarker.is_hunk_candidate());
    assert!(!LineKind::NewFileMarker.is_hunk_candidate());
    assert!(!LineKind::Irrelevant.is_hunk_candidate());
}

// =========================================================================
// Hunk header matching
// =========================================================================

#[test]
fn test_match_with_section_text() {
    let hunk = match_hunk_header("@@ -1,3 +1,4 @@ context").unwrap();

    assert_eq!(hunk.old_range, LineRange::new(1, 4));
    assert_eq!(hunk.new_range, LineRange::new(1, 5));
    assert_eq!(hunk.section_text.as_deref(), Some("context"));
}

#[test]
fn test_match_without_counts() {
    let hunk = match_hunk_header("@@ -5 +7 @@ fn main() {").unwrap();

    assert_eq!(hunk.old_range, LineRange::single(5));
    assert_eq!(hunk.new_range, LineRange::single(7));
}

#[test]
fn test_section_absent_vs_empty() {
    let absent = match_hunk_header("@@ -1 +1 @@").unwrap();
    assert_eq!(absent.section_text, None);

    let empty = match_hunk_header("@@ -1 +1 @@ ").unwrap();
    assert_eq!(empty.section_text.as_deref(), Some(""));
}

#[test]
fn test_section_text_is_verbatim() {
    let hunk = match_hunk_header("@@ -2,2 +2,2 @@  indented @@ tail  ").unwrap();
    assert_eq!(hunk.section_text.as_deref(), Some(" indented @@ tail  "));
}

#[test]
fn test_tab_separates_section_text() {
    let hunk = match_hunk_header("@@ -2 +2 @@\tsection").unwrap();
    assert_eq!(hunk.section_text.as_deref(), Some("section"));
}

#[test]
fn test_trailing_line_terminator_is_ignored() {
    let lf = match_hunk_header("@@ -1,3 +1,4 @@ context\n").unwrap();
    assert_eq!(lf.old_range, LineRange::new(1, 4));
    assert_eq!(lf.section_text.as_deref(), Some("context"));

    let crlf = match_hunk_header("@@ -1,3 +1,4 @@ context\r\n").unwrap();
    assert_eq!(crlf.section_text.as_deref(), Some("context"));

    let cr = match_hunk_header("@@ -1,3 +1,4 @@ context\r").unwrap();
    assert_eq!(cr.section_text.as_deref(), Some("context"));

    // a terminator right after `@@` is not a separator
    let bare = match_hunk_header("@@ -9 +9 @@\n").unwrap();
    assert_eq!(bare.new_range, LineRange::single(9));
    assert_eq!(bare.section_text, None);

    let bare_crlf = match_hunk_header("@@ -9 +9 @@\r\n").unwrap();
    assert_eq!(bare_crlf.section_text, None);
}

#[test]
fn test_embedded_carriage_return_does_not_match() {
    assert!(match_hunk_header("@@ -1 +1 @@ con\rtext").is_none());
}

#[test]
fn test_separator_must_be_ascii_whitespace() {
    assert!(match_hunk_header("@@ -1 +1 @@\u{a0}ctx").is_none());
    assert!(match_hunk_header("@@ -1 +1 @@\u{2003}ctx").is_none());

    let hunk = match_hunk_header("@@ -1 +1 @@\u{0c}ctx").unwrap();
    assert_eq!(hunk.section_text.as_deref(), Some("ctx"));
}

#[test]
fn test_grammar_failures_do_not_match() {
    let lines = [
        "@@ garbage @@",
        "@@ -1 +1",
        "@@ -1 +1 @",
        "@@ +1 -1 @@",
        "@@ -a +1 @@",
        "@@  -1 +1 @@",
        "@@ -1  +1 @@",
        "@@ -1 +1 @@x",
        "@@@ -1,2 -1,2 +1,3 @@@",
        " @@ -1 +1 @@",
    ];

    for line in lines {
        assert!(
            match_hunk_header(line).is_none(),
            "unexpected match for {:?}",
            line
        );
    }
}

#[test]
fn test_malformed_range_in_grammar_does_not_match() {
    // `1,` satisfies the range pattern but is not a valid range
    assert!(match_hunk_header("@@ -1, +1 @@").is_none());
    assert!(match_hunk_header("@@ -1 +99999999999999999999999,1 @@").is_none());
}
