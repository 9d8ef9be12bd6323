//! The new-file side of a diff annotation.

use crate::diff::LineRange;
use crate::error::{DiffScanError, Result};

use super::record::RecordHandle;
use super::{FileAnnotation, Priority, SortKey};

/// A change anchored to the post-change file.
///
/// Only the file name and the line ranges belong to the mirror. Every other
/// field is read from, and written to, the paired [`ChangeRecord`]:
///
/// | field                          | source            |
/// |--------------------------------|-------------------|
/// | file name, short file name     | mirror            |
/// | line ranges                    | mirror            |
/// | temp name                      | mirror            |
/// | primary line, priority         | record            |
/// | message, category, type       | record            |
/// | origin, package, path, module  | record            |
/// | key, context hash, ordering    | record            |
///
/// [`ChangeRecord`]: super::ChangeRecord
#[derive(Debug, Clone)]
pub struct MirrorView {
    record: RecordHandle,
    file_name: String,
    new_range: LineRange,
}

impl MirrorView {
    pub fn new(record: RecordHandle, file_name: impl Into<String>, new_range: LineRange) -> Self {
        Self {
            record,
            file_name: file_name.into(),
            new_range,
        }
    }

    /// The record this view delegates to.
    pub fn record(&self) -> &RecordHandle {
        &self.record
    }

    /// The new-side hunk range.
    pub fn new_range(&self) -> LineRange {
        self.new_range
    }
}

impl FileAnnotation for MirrorView {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    /// The record's primary line as a single-line range, then the full
    /// new-side hunk range.
    fn line_ranges(&self) -> Vec<LineRange> {
        vec![LineRange::single(self.primary_line()), self.new_range]
    }

    fn primary_line(&self) -> usize {
        self.record.primary_line()
    }

    fn priority(&self) -> Priority {
        self.record.priority()
    }

    fn message(&self) -> String {
        self.record.message()
    }

    fn category(&self) -> String {
        self.record.category()
    }

    fn kind(&self) -> String {
        self.record.kind()
    }

    fn origin(&self) -> String {
        self.record.origin()
    }

    fn package_name(&self) -> String {
        self.record.package_name()
    }

    fn path_name(&self) -> String {
        self.record.path_name()
    }

    fn module_name(&self) -> String {
        self.record.module_name()
    }

    fn key(&self) -> u64 {
        self.record.key()
    }

    fn context_hash_code(&self) -> u64 {
        self.record.context_hash_code()
    }

    fn sort_key(&self) -> SortKey {
        self.record.sort_key()
    }

    fn set_file_name(&self, _name: &str) -> Result<()> {
        Err(DiffScanError::UnsupportedOperation(
            "the file name of a mirror view is fixed to the new file".to_string(),
        ))
    }

    fn set_path_name(&self, name: &str) {
        self.record.set_path_name(name);
    }

    fn set_module_name(&self, name: &str) {
        self.record.set_module_name(name);
    }

    fn set_context_hash_code(&self, code: u64) {
        self.record.set_context_hash_code(code);
    }
}
