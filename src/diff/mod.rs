//! Unified diff primitives.
//!
//! This module holds the three stateless-or-nearly-stateless pieces of the
//! scanner:
//! - Range parsing for `start[,count]` hunk tokens
//! - Line classification, which also tracks the current old/new file names
//! - Hunk header matching against the `@@ -old +new @@ section` grammar
//!
//! Nothing here builds annotations; see [`crate::annotation`] for that.

mod classify;
mod hunk;
mod range;

#[cfg(test)]
mod tests;

// Re-export public API
pub use classify::{
    HUNK_PREFIX, HeaderState, LineKind, NEW_FILE_PREFIX, OLD_FILE_PREFIX, classify,
};
pub use hunk::{HunkHeader, match_hunk_header};
pub use range::{LineRange, parse_range};
