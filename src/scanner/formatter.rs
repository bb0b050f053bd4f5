use std::path::Path;

use super::report::{DirectoryRecord, ScanReport};
use super::size::format_size;
use crate::error::Result;

/// Format options for the text report
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Repeated once per depth level in front of each name
    pub indent_marker: char,
    /// Append the per-extension breakdown
    pub show_extensions: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_marker: '-',
            show_extensions: false,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_marker(mut self, marker: char) -> Self {
        self.indent_marker = marker;
        self
    }

    pub fn with_extensions(mut self, show: bool) -> Self {
        self.show_extensions = show;
        self
    }
}

/// Render every recorded directory, one per line, in scan order.
///
/// A blank line opens the report and precedes each top-level subdirectory.
pub fn format_report(report: &ScanReport, options: &FormatOptions) -> String {
    let mut output = String::new();

    for (i, record) in report.directories.iter().enumerate() {
        if i == 0 || record.depth == 1 {
            output.push('\n');
        }
        format_line(record, &mut output, options);
    }

    output
}

fn format_line(record: &DirectoryRecord, output: &mut String, options: &FormatOptions) {
    let mut prefix: String = std::iter::repeat(options.indent_marker)
        .take(record.depth)
        .collect();
    if !prefix.is_empty() {
        prefix.push(' ');
    }

    output.push_str(&format!(
        "{}{} | {}",
        prefix,
        record.name(),
        format_size(record.size)
    ));

    let categories: Vec<String> = record
        .categories
        .non_zero()
        .map(|(category, bytes)| format!("{}:{}", category, format_size(bytes)))
        .collect();
    if !categories.is_empty() {
        output.push_str(&format!(" [ {} ]", categories.join(", ")));
    }

    if options.show_extensions {
        let mut extensions: Vec<(&str, u64)> = record
            .extensions
            .iter()
            .filter(|(_, bytes)| *bytes > 0)
            .collect();
        extensions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if !extensions.is_empty() {
            let parts: Vec<String> = extensions
                .iter()
                .map(|(ext, bytes)| {
                    let ext = if ext.is_empty() { "(none)" } else { ext };
                    format!("{}:{}", ext, format_size(*bytes))
                })
                .collect();
            output.push_str(&format!(" {{ {} }}", parts.join(", ")));
        }
    }

    output.push('\n');
}

/// One-line total for the whole scan
pub fn format_summary(report: &ScanReport) -> String {
    format!(
        "Total: {} in {} files, {} directories",
        format_size(report.size),
        report.file_count,
        report.dir_count
    )
}

/// Notice pointing at the error report file
pub fn format_error_notice(count: usize, error_log: &Path) -> String {
    format!(
        "Encountered {} error{} while scanning, see {}",
        count,
        if count == 1 { "" } else { "s" },
        error_log.display()
    )
}

/// Format the report as JSON
pub fn format_json(report: &ScanReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
