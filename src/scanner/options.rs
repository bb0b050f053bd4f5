use crate::config::ScannerConfig;

/// Configuration options for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Deepest level that gets its own result entry (root = 0, inclusive).
    /// Deeper directories are still walked and counted toward their ancestors.
    pub max_depth: usize,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Stay on the same filesystem (don't cross mount points)
    pub one_file_system: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            include_hidden: true,
            one_file_system: false,
        }
    }
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            include_hidden: config.include_hidden,
            one_file_system: config.one_file_system,
        }
    }

    /// Set maximum reported depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Set whether to stay on the same filesystem
    pub fn with_one_file_system(mut self, enabled: bool) -> Self {
        self.one_file_system = enabled;
        self
    }
}
