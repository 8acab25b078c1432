//! dupescan - Duplicate File Finder
//!
//! A cross-platform Rust CLI application for finding files with identical
//! content across one or more directory trees, using BLAKE3 content hashing
//! with sequential and concurrent aggregation strategies.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod validate;

use std::io;

use crate::cli::{Cli, OutputFormat};
use crate::duplicates::{find_duplicates, find_duplicates_concurrently};
use crate::error::ExitCode;
use crate::output::DuplicateReport;

/// Run the application: validate, walk, hash, and report.
///
/// Returns the exit code the process should terminate with, or the first
/// error encountered. No partial results are ever reported; any failure in
/// validation, traversal, or hashing voids the run.
///
/// # Errors
///
/// Propagates [`validate::ValidationError`], [`scanner::TraversalError`],
/// and [`scanner::HashError`] as terminal failures.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    validate::validate_roots(&cli.directories)?;

    let files = scanner::walk(&cli.directories)?;
    log::info!("Discovered {} files", files.len());

    let grouping = if cli.sequential {
        find_duplicates(&files)?
    } else {
        find_duplicates_concurrently(&files)?
    };

    let report = DuplicateReport::from_grouping(&grouping);
    log::info!(
        "Found {} duplicate files in {} groups",
        report.summary.duplicate_files,
        report.summary.duplicate_groups
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_json(&mut out)?,
    }

    if report.is_empty() {
        Ok(ExitCode::NoDuplicates)
    } else {
        Ok(ExitCode::Success)
    }
}
