use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dirsize - Directory size breakdown by file category
#[derive(Parser, Debug)]
#[command(name = "dirsize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Measure directory sizes with a per-category breakdown
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to analyze (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Deepest level listed in the report, root = 0
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the per-extension breakdown
    #[arg(short, long)]
    pub extensions: bool,

    /// Ignore hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Don't cross filesystem boundaries
    #[arg(short = 'x', long)]
    pub one_file_system: bool,

    /// Where to write traversal errors
    #[arg(long, value_name = "PATH", env = "DIRSIZE_ERROR_LOG")]
    pub error_log: Option<PathBuf>,
}
