use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{DirsizeError, Result};

/// What the scanner was doing when a filesystem call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// `read_dir` on a directory failed; it is treated as empty.
    ListDirectory,
    /// A single entry of an otherwise readable directory failed.
    ReadEntry,
    /// The entry was listed but its metadata could not be read.
    Metadata,
}

impl FailureKind {
    fn describe(self) -> &'static str {
        match self {
            FailureKind::ListDirectory => "failed to list directory",
            FailureKind::ReadEntry => "failed to read directory entry",
            FailureKind::Metadata => "failed to read metadata",
        }
    }
}

/// A recoverable traversal error.
#[derive(Debug, Clone, Serialize)]
pub struct ScanFailure {
    pub kind: FailureKind,
    pub path: PathBuf,
    pub message: String,
}

impl ScanFailure {
    pub fn new(kind: FailureKind, path: &Path, err: &io::Error) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            message: format!("{} ({:?})", err, err.kind()),
        }
    }
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.kind.describe())?;
        writeln!(f, "  path: {}", self.path.display())?;
        write!(f, "  cause: {}", self.message)
    }
}

/// Append-only record of everything that went wrong during one scan.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ScanErrorLog {
    failures: Vec<ScanFailure>,
    #[serde(skip)]
    persisted: usize,
}

impl ScanErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ScanFailure) {
        tracing::warn!(
            path = %failure.path.display(),
            kind = ?failure.kind,
            "{}",
            failure.message
        );
        self.failures.push(failure);
    }

    /// Formatted descriptions, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Write entries not yet persisted to `path`.
    ///
    /// The first write of a log truncates the file; later writes append.
    pub fn persist(&mut self, path: &Path) -> Result<()> {
        if self.persisted == self.failures.len() {
            return Ok(());
        }

        let first_write = self.persisted == 0;
        let io_err = |source| DirsizeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(first_write)
            .append(!first_write)
            .open(path)
            .map_err(io_err)?;

        for failure in &self.failures[self.persisted..] {
            writeln!(file, "{}\n", failure).map_err(io_err)?;
        }

        tracing::debug!(
            path = %path.display(),
            written = self.failures.len() - self.persisted,
            "Persisted scan errors"
        );
        self.persisted = self.failures.len();
        Ok(())
    }
}
