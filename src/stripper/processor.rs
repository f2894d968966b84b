//! Per-file processing pipeline
//!
//! Existence check, load, transform, conditional write.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::config::StripRule;
use crate::errors::{Result, file_operation_error};

use super::outcome::Outcome;
use super::pattern::StripPattern;
use super::transform::transform;

/// Processes a single target file
///
/// A path that does not resolve to a regular file yields
/// [`Outcome::NotFound`] and is not an error; the caller continues with
/// the next path. Any other read or write failure is propagated and
/// aborts the run.
///
/// # Arguments
/// * `path` - The target file
/// * `pattern` - The compiled parameter pattern
/// * `rule` - The strip rule, used for the guarded import pruning
/// * `dry_run` - When true, the outcome is computed but no file is written
///
/// # Errors
/// Returns an error if the file cannot be read or written
pub fn process_file(
    path: &Path,
    pattern: &StripPattern,
    rule: &StripRule,
    dry_run: bool,
) -> Result<Outcome> {
    if !path.is_file() {
        return Ok(Outcome::NotFound);
    }

    let original = fs::read_to_string(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
    trace!("Read {} bytes from {}", original.len(), path.display());

    let transformed = transform(&original, pattern, rule);

    if transformed == original {
        return Ok(Outcome::Unchanged);
    }

    if dry_run {
        debug!("Dry run, not writing {}", path.display());
    } else {
        fs::write(path, &transformed)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
        debug!("Rewrote {}", path.display());
    }

    Ok(Outcome::Updated)
}
