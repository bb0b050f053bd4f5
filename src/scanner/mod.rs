mod aggregator;
mod category;
mod errors;
mod formatter;
mod options;
mod report;
mod size;
mod totals;

pub use aggregator::{
    scan_directory, DirLister, EntryKind, FsLister, ListedEntry, SizeAggregator,
};
pub use category::{extension_key, Category};
pub use errors::{FailureKind, ScanErrorLog, ScanFailure};
pub use formatter::{
    format_error_notice, format_json, format_report, format_summary, FormatOptions,
};
pub use options::ScanOptions;
pub use report::{DirectoryRecord, ScanReport};
pub use size::format_size;
pub use totals::{CategoryTotals, DirStats, ExtensionTotals};
