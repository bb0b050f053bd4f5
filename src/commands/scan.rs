//! Scan command implementation

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::{DirsizeError, Result};
use crate::scanner::{
    format_error_notice, format_json, format_report, format_summary, scan_directory,
    FormatOptions, ScanOptions,
};

/// Run the scan command
pub fn run(args: ScanArgs, config: &Config) -> Result<()> {
    let (path, max_depth) = match args.path {
        Some(path) => (path, args.max_depth.unwrap_or(config.scanner.max_depth)),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            // Prompts stay off stdout so --json output remains parseable
            let mut output = io::stderr();
            let path = prompt_path(&mut input, &mut output)?;
            let depth = match args.max_depth {
                Some(depth) => depth,
                None => prompt_depth(&mut input, &mut output, config.scanner.max_depth)?,
            };
            (path, depth)
        }
    };

    let root = resolve_root(&path)?;

    let scan_options = ScanOptions::from_config(&config.scanner)
        .with_max_depth(max_depth)
        .with_hidden(config.scanner.include_hidden && !args.skip_hidden)
        .with_one_file_system(config.scanner.one_file_system || args.one_file_system);

    tracing::info!(path = %root.display(), max_depth, "Scanning directory");

    let mut report = scan_directory(&root, &scan_options);

    if args.json {
        println!("{}", format_json(&report, true)?);
    } else {
        let format_options = FormatOptions::new()
            .with_indent_marker(config.report.indent_marker)
            .with_extensions(config.report.show_extensions || args.extensions);

        print!("{}", format_report(&report, &format_options));
        println!();
        println!("{}", format_summary(&report));
    }

    if report.has_errors() {
        let error_log = args
            .error_log
            .unwrap_or_else(|| config.report.error_log.clone());
        report.errors.persist(&error_log)?;

        let notice = format_error_notice(report.errors.len(), &error_log);
        if args.json {
            eprintln!("{}", notice);
        } else {
            println!();
            println!("{}", notice);
        }
    }

    Ok(())
}

/// Canonicalize the root and make sure it is a directory.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path.canonicalize().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DirsizeError::PathNotFound(path.to_path_buf())
        } else {
            DirsizeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !root.is_dir() {
        return Err(DirsizeError::NotADirectory(root));
    }
    Ok(root)
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    let stdio_err = |source| DirsizeError::Io {
        path: PathBuf::from("<stdin>"),
        source,
    };

    write!(output, "{}", question).map_err(stdio_err)?;
    output.flush().map_err(stdio_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(stdio_err)?;
    Ok(line.trim().to_string())
}

/// Ask for the directory to scan. A trailing `/` is dropped and an empty
/// answer means the current directory.
pub fn prompt_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    let answer = read_answer(input, output, "Directory path: ")?;
    let trimmed = answer.trim_end_matches('/');

    let path = if trimmed.is_empty() && answer.starts_with('/') {
        "/"
    } else if trimmed.is_empty() {
        "."
    } else {
        trimmed
    };
    Ok(PathBuf::from(path))
}

/// Ask for the maximum depth, falling back to `default` on an empty answer.
pub fn prompt_depth<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: usize,
) -> Result<usize> {
    let answer = read_answer(input, output, &format!("Maximum depth [{}]: ", default))?;
    parse_depth(&answer, default)
}

fn parse_depth(answer: &str, default: usize) -> Result<usize> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| DirsizeError::InvalidDepth(answer.to_string()))
}
