use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use super::errors::{FailureKind, ScanErrorLog, ScanFailure};
use super::options::ScanOptions;
use super::report::{DirectoryRecord, ScanReport};
use super::totals::DirStats;

/// What a listed entry turned out to be, from its lstat metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { size: u64 },
    Dir { dev: u64 },
    /// Symlinks, sockets, devices: not followed, not counted
    Other,
}

/// One entry of a directory listing.
#[derive(Debug)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    /// Fails when the entry vanished or can't be stat'ed after listing
    pub kind: io::Result<EntryKind>,
}

/// Source of directory listings for the aggregator.
///
/// The outer `Err` means the directory itself couldn't be opened; an inner
/// `Err` is a single unreadable entry.
pub trait DirLister {
    fn list(&self, path: &Path) -> io::Result<Vec<io::Result<ListedEntry>>>;
}

/// Lists the real filesystem without following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<io::Result<ListedEntry>>> {
        let entries = fs::read_dir(path)?
            .map(|entry| {
                entry.map(|entry| ListedEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.path(),
                    kind: entry.metadata().map(|m| {
                        if m.is_dir() {
                            EntryKind::Dir { dev: m.dev() }
                        } else if m.is_file() {
                            EntryKind::File { size: m.len() }
                        } else {
                            EntryKind::Other
                        }
                    }),
                })
            })
            .collect();
        Ok(entries)
    }
}

/// A directory whose subtree is still being walked.
struct Frame {
    path: PathBuf,
    depth: usize,
    /// Slot in the result set, if this directory is within the reported depth
    record: Option<usize>,
    /// Subdirectories not yet visited, next one last
    pending: Vec<PathBuf>,
    stats: DirStats,
}

/// Walks a directory tree depth-first and sums sizes per directory,
/// per category and per extension.
///
/// One aggregator performs exactly one scan; [`SizeAggregator::scan`]
/// consumes it. Traversal uses an explicit stack, so deep trees don't
/// grow the call stack.
pub struct SizeAggregator<L = FsLister> {
    options: ScanOptions,
    lister: L,
    records: Vec<DirectoryRecord>,
    errors: ScanErrorLog,
    file_count: u64,
    dir_count: u64,
    root_dev: Option<u64>,
}

impl SizeAggregator<FsLister> {
    pub fn new(options: ScanOptions) -> Self {
        Self::with_lister(options, FsLister)
    }
}

impl<L: DirLister> SizeAggregator<L> {
    pub fn with_lister(options: ScanOptions, lister: L) -> Self {
        Self {
            options,
            lister,
            records: Vec::new(),
            errors: ScanErrorLog::new(),
            file_count: 0,
            dir_count: 0,
            root_dev: None,
        }
    }

    /// Scan `root`. Never fails: unreadable directories are logged in the
    /// report's error log and count as empty.
    pub fn scan(mut self, root: &Path) -> ScanReport {
        tracing::debug!(root = %root.display(), max_depth = self.options.max_depth, "Starting scan");

        if self.options.one_file_system {
            self.root_dev = fs::metadata(root).ok().map(|m| m.dev());
        }

        let mut stack = vec![self.open(root.to_path_buf(), 0)];
        let mut total = DirStats::default();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.pop().map(|child| (child, frame.depth + 1)),
                None => break,
            };

            if let Some((child, depth)) = next {
                let frame = self.open(child, depth);
                stack.push(frame);
                continue;
            }

            // Every child of the top frame has been merged into it
            let Some(done) = stack.pop() else { break };
            let stats = self.close(done);
            match stack.last_mut() {
                Some(parent) => parent.stats.merge(&stats),
                None => total = stats,
            }
        }

        tracing::info!(
            root = %root.display(),
            size = total.size,
            files = self.file_count,
            dirs = self.dir_count,
            errors = self.errors.len(),
            "Scan complete"
        );

        ScanReport {
            root: root.to_path_buf(),
            max_depth: self.options.max_depth,
            size: total.size,
            file_count: self.file_count,
            dir_count: self.dir_count,
            directories: self.records,
            errors: self.errors,
        }
    }

    /// Register a directory, list it and account its direct files.
    fn open(&mut self, path: PathBuf, depth: usize) -> Frame {
        self.dir_count += 1;

        let record = if depth <= self.options.max_depth {
            self.records
                .push(DirectoryRecord::provisional(path.clone(), depth));
            Some(self.records.len() - 1)
        } else {
            None
        };

        let mut frame = Frame {
            path,
            depth,
            record,
            pending: Vec::new(),
            stats: DirStats::default(),
        };

        let entries = match self.list(&frame.path) {
            Ok(entries) => entries,
            Err(failure) => {
                self.errors.push(failure);
                return frame;
            }
        };

        for entry in entries {
            if !self.options.include_hidden && entry.name.starts_with('.') {
                continue;
            }

            let kind = match entry.kind {
                Ok(kind) => kind,
                Err(err) => {
                    self.errors
                        .push(ScanFailure::new(FailureKind::Metadata, &entry.path, &err));
                    continue;
                }
            };

            match kind {
                EntryKind::Dir { dev } => {
                    if self.root_dev.is_some_and(|root_dev| root_dev != dev) {
                        tracing::debug!(path = %entry.path.display(), "Skipping other filesystem");
                        continue;
                    }
                    frame.pending.push(entry.path);
                }
                EntryKind::File { size } => {
                    self.file_count += 1;
                    frame.stats.add_file(&entry.name, size);
                }
                EntryKind::Other => {
                    tracing::trace!(path = %entry.path.display(), "Skipping special file");
                }
            }
        }

        // Visit subdirectories in name order
        frame.pending.reverse();
        tracing::trace!(path = %frame.path.display(), depth, "Opened directory");
        frame
    }

    /// Read the entries of `path` sorted by name.
    ///
    /// Only a failure to open the directory is returned; individual bad
    /// entries are logged and skipped.
    fn list(&mut self, path: &Path) -> Result<Vec<ListedEntry>, ScanFailure> {
        let listing = self
            .lister
            .list(path)
            .map_err(|err| ScanFailure::new(FailureKind::ListDirectory, path, &err))?;

        let mut entries = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(err) => self
                    .errors
                    .push(ScanFailure::new(FailureKind::ReadEntry, path, &err)),
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Finalize a directory's result entry and hand its totals to the parent.
    fn close(&mut self, frame: Frame) -> DirStats {
        if let Some(idx) = frame.record {
            self.records[idx].finalize(&frame.stats);
        }
        frame.stats
    }
}

/// Scan a directory with the given options
pub fn scan_directory(root: &Path, options: &ScanOptions) -> ScanReport {
    SizeAggregator::new(options.clone()).scan(root)
}
