//! Diff annotations.
//!
//! Every matched hunk header yields a pair of annotations:
//! - a [`RecordHandle`] anchored to the old file and the old-side range
//! - a [`MirrorView`] anchored to the new file, delegating everything except
//!   its file identity and line ranges to the record
//!
//! Both implement [`FileAnnotation`], which is the full list of what a host
//! can ask an annotation. The pair is always emitted together, record first.

mod builder;
mod message;
mod mirror;
mod naming;
mod record;


use crate::context::BuildContext;
use crate::diff::LineRange;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

// Re-export public API
pub use builder::{ChangeRecordBuilder, DIFF_CATEGORY, DIFF_ORIGIN, DIFF_TYPE};
pub use message::{DEFAULT_MESSAGE_TEMPLATE, MessageTemplate, TemplateError};
pub use mirror::MirrorView;
pub use naming::{WORKSPACE_FILES, name_hash, short_file_name, temp_name};
pub use record::{ChangeRecord, RecordHandle};

/// Severity attached to an annotation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

/// Ordering key shared by a record and its mirror.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub file_name: String,
    pub primary_line: usize,
    pub key: u64,
}

/// Everything a host can read from or write to an annotation.
///
/// Setters take `&self`: annotations share their record, and a rename made
/// through either side must be visible through both.
pub trait FileAnnotation {
    fn file_name(&self) -> String;

    /// The file name without its directories (`/` and `\` both separate).
    fn short_file_name(&self) -> String {
        short_file_name(&self.file_name()).to_string()
    }

    fn line_ranges(&self) -> Vec<LineRange>;
    fn primary_line(&self) -> usize;
    fn priority(&self) -> Priority;
    fn message(&self) -> String;
    fn category(&self) -> String;
    /// The annotation type (`type` is reserved).
    fn kind(&self) -> String;
    fn origin(&self) -> String;
    fn package_name(&self) -> String;

    fn has_package_name(&self) -> bool {
        !self.package_name().is_empty()
    }

    fn path_name(&self) -> String;
    fn module_name(&self) -> String;
    fn key(&self) -> u64;
    fn context_hash_code(&self) -> u64;

    /// Where a host caches a copy of this annotation's file.
    fn temp_name(&self, ctx: &dyn BuildContext) -> PathBuf {
        temp_name(ctx, &self.file_name())
    }

    fn sort_key(&self) -> SortKey;

    fn compare_to(&self, other: &dyn FileAnnotation) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Rename the file this annotation is anchored to.
    ///
    /// # Errors
    ///
    /// [`DiffScanError::UnsupportedOperation`](crate::error::DiffScanError::UnsupportedOperation)
    /// for a [`MirrorView`].
    fn set_file_name(&self, name: &str) -> Result<()>;
    fn set_path_name(&self, name: &str);
    fn set_module_name(&self, name: &str);
    fn set_context_hash_code(&self, code: u64);
}

/// Which file an annotation is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Old,
    New,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Old => "old",
            Side::New => "new",
        }
    }
}

/// One emitted annotation.
#[derive(Debug, Clone)]
pub enum Annotation {
    Change(RecordHandle),
    Mirror(MirrorView),
}

impl Annotation {
    pub fn side(&self) -> Side {
        match self {
            Annotation::Change(_) => Side::Old,
            Annotation::Mirror(_) => Side::New,
        }
    }

    fn as_file_annotation(&self) -> &dyn FileAnnotation {
        match self {
            Annotation::Change(record) => record,
            Annotation::Mirror(mirror) => mirror,
        }
    }

    /// Capture the annotation's current state for serialization.
    pub fn snapshot(&self) -> AnnotationSnapshot {
        let annotation = self.as_file_annotation();
        AnnotationSnapshot {
            side: self.side(),
            key: annotation.key(),
            file_name: annotation.file_name(),
            short_file_name: annotation.short_file_name(),
            line_ranges: annotation.line_ranges(),
            primary_line: annotation.primary_line(),
            priority: annotation.priority(),
            category: annotation.category(),
            kind: annotation.kind(),
            origin: annotation.origin(),
            message: annotation.message(),
            path_name: annotation.path_name(),
            module_name: annotation.module_name(),
            temp_name: None,
        }
    }

    /// Like [`Annotation::snapshot`], with the temp name resolved against `ctx`.
    pub fn snapshot_in(&self, ctx: &dyn BuildContext) -> AnnotationSnapshot {
        AnnotationSnapshot {
            temp_name: Some(self.temp_name(ctx)),
            ..self.snapshot()
        }
    }
}

impl FileAnnotation for Annotation {
    fn file_name(&self) -> String {
        self.as_file_annotation().file_name()
    }

    fn line_ranges(&self) -> Vec<LineRange> {
        self.as_file_annotation().line_ranges()
    }

    fn primary_line(&self) -> usize {
        self.as_file_annotation().primary_line()
    }

    fn priority(&self) -> Priority {
        self.as_file_annotation().priority()
    }

    fn message(&self) -> String {
        self.as_file_annotation().message()
    }

    fn category(&self) -> String {
        self.as_file_annotation().category()
    }

    fn kind(&self) -> String {
        self.as_file_annotation().kind()
    }

    fn origin(&self) -> String {
        self.as_file_annotation().origin()
    }

    fn package_name(&self) -> String {
        self.as_file_annotation().package_name()
    }

    fn path_name(&self) -> String {
        self.as_file_annotation().path_name()
    }

    fn module_name(&self) -> String {
        self.as_file_annotation().module_name()
    }

    fn key(&self) -> u64 {
        self.as_file_annotation().key()
    }

    fn context_hash_code(&self) -> u64 {
        self.as_file_annotation().context_hash_code()
    }

    fn sort_key(&self) -> SortKey {
        self.as_file_annotation().sort_key()
    }

    fn set_file_name(&self, name: &str) -> Result<()> {
        self.as_file_annotation().set_file_name(name)
    }

    fn set_path_name(&self, name: &str) {
        self.as_file_annotation().set_path_name(name);
    }

    fn set_module_name(&self, name: &str) {
        self.as_file_annotation().set_module_name(name);
    }

    fn set_context_hash_code(&self, code: u64) {
        self.as_file_annotation().set_context_hash_code(code);
    }
}

/// Serializable view of an [`Annotation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSnapshot {
    pub side: Side,
    pub key: u64,
    pub file_name: String,
    pub short_file_name: String,
    pub line_ranges: Vec<LineRange>,
    pub primary_line: usize,
    pub priority: Priority,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub message: String,
    pub path_name: String,
    pub module_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_name: Option<PathBuf>,
}
