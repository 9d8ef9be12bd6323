//! File name helpers shared by both sides of an annotation.

use crate::context::BuildContext;
use std::path::PathBuf;

/// Directory under the build root where hosts cache annotated files.
pub const WORKSPACE_FILES: &str = "workspace-files";

/// 32-bit polynomial hash of a file name.
///
/// Computed as `h = 31 * h + unit` over the UTF-16 code units of `name`,
/// with wrapping arithmetic, so cached files keep the same names that other
/// tools sharing the cache directory compute.
pub fn name_hash(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// The last path component of `name`, accepting both `/` and `\` separators.
pub fn short_file_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// `<root>/workspace-files/<hex hash of name>.tmp`
pub fn temp_name(ctx: &dyn BuildContext, name: &str) -> PathBuf {
    ctx.root_dir()
        .join(WORKSPACE_FILES)
        .join(format!("{:x}.tmp", name_hash(name)))
}
