//! Build context resolution.
//!
//! Hosts that display annotated files keep a cached copy of each file under
//! a build root directory. The scanner never touches that directory; it only
//! derives paths inside it on demand through [`BuildContext`].

use crate::error::{DiffScanError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Anything that can name the root directory of a build.
pub trait BuildContext {
    fn root_dir(&self) -> &Path;
}

/// A build context rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDirContext {
    root: PathBuf,
}

impl RootDirContext {
    /// Use `root` as given.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the build root from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RootDirContext)` - Context rooted at the absolute working directory
    /// * `Err(DiffScanError::UserError)` - If the working directory is unavailable
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            DiffScanError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::new(cwd))
    }

    /// Resolve `dir` to an absolute build root.
    ///
    /// Relative paths are taken relative to the current working directory.
    /// The directory does not need to exist.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.is_absolute() {
            return Ok(Self::new(dir));
        }

        let cwd = Self::resolve()?;
        Ok(Self::new(cwd.root.join(dir)))
    }
}

impl BuildContext for RootDirContext {
    fn root_dir(&self) -> &Path {
        &self.root
    }
}
