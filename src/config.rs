use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Deepest directory level listed in the report (root = 0)
    pub max_depth: usize,
    /// Count hidden files and directories
    pub include_hidden: bool,
    /// Don't descend into other filesystems
    pub one_file_system: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File that receives traversal errors
    pub error_log: PathBuf,
    /// Character repeated once per depth level
    pub indent_marker: char,
    /// Append the per-extension breakdown to each line
    pub show_extensions: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            include_hidden: true,
            one_file_system: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from("exceptions.log"),
            indent_marker: '-',
            show_extensions: false,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default location
    /// if it exists, falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `$XDG_CONFIG_HOME/dirsize/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirsize").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.report.error_log.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("report.error_log must not be empty".into()));
        }
        let marker = self.report.indent_marker;
        if marker.is_whitespace() || marker.is_control() {
            return Err(ConfigError::Invalid(format!(
                "report.indent_marker must be visible, got {:?}",
                marker
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scanner.max_depth, 10);
        assert_eq!(config.report.error_log, PathBuf::from("exceptions.log"));
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[scanner]"));
        assert!(toml_str.contains("[report]"));
    }

    #[test]
    fn whitespace_marker_is_rejected() {
        let mut config = Config::default();
        config.report.indent_marker = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_error_log_is_rejected() {
        let mut config = Config::default();
        config.report.error_log = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
