use serde::Serialize;
use std::path::{Path, PathBuf};

use super::errors::ScanErrorLog;
use super::totals::{CategoryTotals, DirStats, ExtensionTotals};

/// Aggregated size of one directory within the reported depth.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryRecord {
    /// Full path to the directory
    pub path: PathBuf,

    /// Distance from the scan root (root = 0)
    pub depth: usize,

    /// Bytes of all files in this directory and below
    pub size: u64,

    pub categories: CategoryTotals,

    pub extensions: ExtensionTotals,
}

impl DirectoryRecord {
    /// Placeholder registered before the directory's contents are known.
    pub(crate) fn provisional(path: PathBuf, depth: usize) -> Self {
        Self {
            path,
            depth,
            size: 0,
            categories: CategoryTotals::new(),
            extensions: ExtensionTotals::new(),
        }
    }

    pub(crate) fn finalize(&mut self, stats: &DirStats) {
        self.size = stats.size;
        self.categories = stats.categories;
        self.extensions = stats.extensions.clone();
    }

    /// Last path component, or the whole path for `/` and similar roots.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Everything one scan produced.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,

    pub max_depth: usize,

    /// Total bytes under the root
    pub size: u64,

    /// Regular files counted
    pub file_count: u64,

    /// Directories visited, root included
    pub dir_count: u64,

    /// Directories at depth <= max_depth in depth-first pre-order
    pub directories: Vec<DirectoryRecord>,

    pub errors: ScanErrorLog,
}

impl ScanReport {
    pub fn directory(&self, path: &Path) -> Option<&DirectoryRecord> {
        self.directories.iter().find(|d| d.path == path)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
