//! Workflow engine
//!
//! This module contains the engine that orchestrates the run.

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::config::{load_config, resolve_config_path};
use crate::stripper::{StripPattern, completion_line, process_file};

use super::context::RunStats;

/// Options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to compute outcomes without writing any file
    pub dry_run: bool,
}

/// Processes every configured file in order
///
/// The steps are:
/// 1. Resolve and load the configuration
/// 2. Compile the parameter pattern from the rule
/// 3. Process each path in list order, printing one status line per file
/// 4. Print the completion line and log a summary
///
/// A missing file is reported and skipped; any other I/O failure aborts
/// the run with the transcript printed so far left on stdout.
///
/// # Arguments
/// * `options` - Options for the run
///
/// # Returns
/// * `Result<RunStats>` - The accumulated statistics or an error
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the pattern
/// cannot be compiled, or a file cannot be read or written
pub fn run(options: RunOptions) -> Result<RunStats> {
    let config_file_path = resolve_config_path(options.config_path)?;
    let config = load_config(config_file_path)?;

    let pattern = StripPattern::compile(&config.rule)?;

    info!(
        "Processing {} files{}...",
        config.files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let mut stats = RunStats::default();

    for path in &config.files {
        debug!("Processing file: {}", path.display());

        let outcome = process_file(path, &pattern, &config.rule, options.dry_run)?;
        println!("{}", outcome.report_line(path));

        stats.record(outcome);
    }

    println!("\n{}", completion_line());

    info!(
        "Finished processing {} files: {} updated, {} unchanged, {} missing",
        stats.processed, stats.updated, stats.unchanged, stats.missing
    );

    Ok(stats)
}
