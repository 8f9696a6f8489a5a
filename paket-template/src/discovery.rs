//! Template file discovery.
//!
//! Finds template files by walking a directory tree and matching file
//! names against a fixed suffix (`paket.template` by default, so both
//! `paket.template` and `MyProject.paket.template` are found).

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use crate::template::{TemplateError, TemplateResult};

/// Default template file name suffix.
pub const TEMPLATE_SUFFIX: &str = "paket.template";

/// Discovers template files under a root directory.
#[derive(Debug, Clone)]
pub struct TemplateDiscovery {
    /// Root directory to search.
    root: PathBuf,

    /// File name suffix identifying template files.
    suffix: String,
}

impl TemplateDiscovery {
    /// Create a discovery rooted at `root` using the default suffix.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: TEMPLATE_SUFFIX.to_string(),
        }
    }

    /// Use a different file name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file name suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The glob pattern used for the search.
    fn pattern(&self) -> String {
        let root = Pattern::escape(&self.root.to_string_lossy());
        let suffix = Pattern::escape(&self.suffix);
        format!("{}/**/*{}", root.trim_end_matches('/'), suffix)
    }

    /// Find all template files, sorted by path.
    ///
    /// A missing root yields an empty list.
    pub fn find_templates(&self) -> TemplateResult<Vec<PathBuf>> {
        let pattern = self.pattern();
        debug!(pattern = %pattern, "Searching for template files");

        let paths = glob::glob(&pattern).map_err(|e| TemplateError::InvalidPattern(e.to_string()))?;

        let mut found = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                TemplateError::ReadFailed {
                    path,
                    source: e.into(),
                }
            })?;
            if path.is_file() {
                found.push(path);
            }
        }

        found.sort();
        debug!(count = found.len(), root = %self.root.display(), "Found template files");
        Ok(found)
    }
}

/// Find all `paket.template` files below `root`.
pub fn find_template_files(root: impl AsRef<Path>) -> TemplateResult<Vec<PathBuf>> {
    TemplateDiscovery::new(root.as_ref()).find_templates()
}
