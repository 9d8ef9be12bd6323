//! Building annotation pairs from matched hunk headers.

use crate::config::Config;
use crate::diff::HunkHeader;
use crate::error::{DiffScanError, Result};

use super::message::MessageTemplate;
use super::mirror::MirrorView;
use super::record::{ChangeRecord, RecordHandle};
use super::{Annotation, Priority};

/// Category of every diff annotation.
pub const DIFF_CATEGORY: &str = "diff";

/// Type of every diff annotation.
pub const DIFF_TYPE: &str = "diff";

/// Origin reported by every diff annotation.
pub const DIFF_ORIGIN: &str = "unified-diff";

/// Builds the (record, mirror) pair for one hunk.
#[derive(Debug, Clone, Default)]
pub struct ChangeRecordBuilder {
    template: MessageTemplate,
    priority: Priority,
}

impl ChangeRecordBuilder {
    pub fn new(template: MessageTemplate, priority: Priority) -> Self {
        Self { template, priority }
    }

    /// Builder using the configured message template and priority.
    ///
    /// # Returns
    ///
    /// * `Ok(ChangeRecordBuilder)` - Template parsed successfully
    /// * `Err(DiffScanError::UserError)` - If the message template is invalid (config error, exit 1)
    pub fn from_config(config: &Config) -> Result<Self> {
        let template = MessageTemplate::parse(&config.message_template).map_err(|e| {
            DiffScanError::UserError(format!(
                "{}\n\
                 Fix: edit the config file and use only {{old}} and {{new}} placeholders.",
                e
            ))
        })?;

        Ok(Self::new(template, config.priority))
    }

    /// Build the annotation pair for `hunk`.
    ///
    /// Missing file names become empty strings. `key` identifies the pair
    /// within its scan and is shared by both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use diffscan::annotation::{ChangeRecordBuilder, FileAnnotation};
    /// use diffscan::diff::{match_hunk_header, LineRange};
    ///
    /// let hunk = match_hunk_header("@@ -3,2 +3,5 @@").unwrap();
    /// let (record, mirror) =
    ///     ChangeRecordBuilder::default().build(&hunk, Some("old.c"), Some("new.c"), 0);
    ///
    /// assert_eq!(record.file_name(), "old.c");
    /// assert_eq!(mirror.file_name(), "new.c");
    /// assert_eq!(mirror.line_ranges(), vec![LineRange::single(3), LineRange::new(3, 8)]);
    /// ```
    pub fn build(
        &self,
        hunk: &HunkHeader,
        old_file_name: Option<&str>,
        new_file_name: Option<&str>,
        key: u64,
    ) -> (RecordHandle, MirrorView) {
        let old_file = old_file_name.unwrap_or_default();
        let new_file = new_file_name.unwrap_or_default();

        let record = RecordHandle::new(ChangeRecord {
            file_name: old_file.to_string(),
            line_range: hunk.old_range,
            priority: self.priority,
            category: DIFF_CATEGORY.to_string(),
            kind: DIFF_TYPE.to_string(),
            message: self.message(hunk, old_file, new_file),
            origin: DIFF_ORIGIN.to_string(),
            package_name: String::new(),
            path_name: String::new(),
            module_name: String::new(),
            context_hash_code: 0,
            key,
        });

        let mirror = MirrorView::new(record.clone(), new_file, hunk.new_range);
        (record, mirror)
    }

    /// Build the pair and append it to `out`, record first.
    pub fn build_into(
        &self,
        hunk: &HunkHeader,
        old_file_name: Option<&str>,
        new_file_name: Option<&str>,
        key: u64,
        out: &mut Vec<Annotation>,
    ) {
        let (record, mirror) = self.build(hunk, old_file_name, new_file_name, key);
        out.push(Annotation::Change(record));
        out.push(Annotation::Mirror(mirror));
    }

    fn message(&self, hunk: &HunkHeader, old_file: &str, new_file: &str) -> String {
        let message = self.template.render(old_file, new_file);
        match &hunk.section_text {
            Some(section) => format!("{}\n{}", message, section),
            None => message,
        }
    }
}
