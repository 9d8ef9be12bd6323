//! Scanning diffs into annotations.
//!
//! - [`CancelToken`]: cooperative cancellation polled once per line
//! - [`scan_lines`] and [`LineParser`]: the generic line-by-line host
//! - [`UnifiedDiffParser`]: the unified diff parser driven by that host

mod cancel;
mod host;
mod unified;


// Re-export public API
pub use cancel::CancelToken;
pub use host::{LineParser, ScanStats, scan_lines};
pub use unified::{UnifiedDiffParser, scan_diff};
