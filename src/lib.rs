//! dirsize - directory size breakdown
//!
//! This crate provides functionality for:
//! - Summing disk usage per directory down to a depth limit
//! - Breaking totals down by file category and extension
//! - Collecting unreadable paths without aborting the scan

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{DirsizeError, Result};
