//! Command-line interface definitions for dupescan.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Scan one directory
//! dupescan ~/Downloads
//!
//! # Scan several trees at once
//! dupescan ~/Pictures ~/Backup/Pictures
//!
//! # JSON output for scripting
//! dupescan ~/Downloads --output json
//!
//! # Verbose mode for debugging
//! dupescan -v ~/Downloads
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Duplicate file finder using BLAKE3 content hashing.
///
/// dupescan recursively walks the given directories, hashes every regular
/// file, and reports groups of files with byte-identical content.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories to scan for duplicate files
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// Hash files one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output format (text for humans, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
