//! The old-file side of a diff annotation.

use crate::diff::LineRange;
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{FileAnnotation, Priority, SortKey};

/// A change anchored to the pre-change file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Old file name (empty if no `---` marker preceded the hunk).
    pub file_name: String,
    /// The old-side hunk range.
    pub line_range: LineRange,
    pub priority: Priority,
    pub category: String,
    pub kind: String,
    pub message: String,
    pub origin: String,
    /// Always empty for diffs; kept so consumers can treat every annotation alike.
    pub package_name: String,
    pub path_name: String,
    pub module_name: String,
    pub context_hash_code: u64,
    /// Position of the hunk within its scan, starting at 0.
    pub key: u64,
}

impl ChangeRecord {
    /// The single anchor line for hosts that only support one location.
    pub fn primary_line(&self) -> usize {
        self.line_range.start
    }
}

/// Shared handle to a [`ChangeRecord`].
///
/// The handle emitted for the old side and the one held by its
/// [`MirrorView`](super::MirrorView) point at the same record, so metadata
/// renamed through either side is seen by both.
#[derive(Debug, Clone)]
pub struct RecordHandle {
    inner: Arc<RwLock<ChangeRecord>>,
}

impl RecordHandle {
    pub fn new(record: ChangeRecord) -> Self {
        Self {
            inner: Arc::new(RwLock::new(record)),
        }
    }

    /// A copy of the record as it is right now.
    pub fn record(&self) -> ChangeRecord {
        self.read().clone()
    }

    /// Whether both handles refer to the same underlying record.
    pub fn same_record(&self, other: &RecordHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // Every write replaces a whole field, so a poisoned lock still guards a
    // complete record.
    fn read(&self) -> RwLockReadGuard<'_, ChangeRecord> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ChangeRecord> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileAnnotation for RecordHandle {
    fn file_name(&self) -> String {
        self.read().file_name.clone()
    }

    fn line_ranges(&self) -> Vec<LineRange> {
        vec![self.read().line_range]
    }

    fn primary_line(&self) -> usize {
        self.read().primary_line()
    }

    fn priority(&self) -> Priority {
        self.read().priority
    }

    fn message(&self) -> String {
        self.read().message.clone()
    }

    fn category(&self) -> String {
        self.read().category.clone()
    }

    fn kind(&self) -> String {
        self.read().kind.clone()
    }

    fn origin(&self) -> String {
        self.read().origin.clone()
    }

    fn package_name(&self) -> String {
        self.read().package_name.clone()
    }

    fn path_name(&self) -> String {
        self.read().path_name.clone()
    }

    fn module_name(&self) -> String {
        self.read().module_name.clone()
    }

    fn key(&self) -> u64 {
        self.read().key
    }

    fn context_hash_code(&self) -> u64 {
        self.read().context_hash_code
    }

    fn sort_key(&self) -> SortKey {
        let record = self.read();
        SortKey {
            file_name: record.file_name.clone(),
            primary_line: record.primary_line(),
            key: record.key,
        }
    }

    fn set_file_name(&self, name: &str) -> Result<()> {
        self.write().file_name = name.to_string();
        Ok(())
    }

    fn set_path_name(&self, name: &str) {
        self.write().path_name = name.to_string();
    }

    fn set_module_name(&self, name: &str) {
        self.write().module_name = name.to_string();
    }

    fn set_context_hash_code(&self, code: u64) {
        self.write().context_hash_code = code;
    }
}
