//! Diffscan: streaming unified-diff scanner.
//!
//! Reads unified diff text line by line and emits, for every hunk header, a
//! pair of annotations: one anchored to the old file and one mirroring it onto
//! the new file. Hosts drive the scan through [`scan::LineParser`] and read the
//! results through [`annotation::FileAnnotation`].

pub mod annotation;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod scan;

#[cfg(test)]
mod test_support;
