//! Run statistics
//!
//! This module defines the counters accumulated over a run.

use crate::stripper::Outcome;

/// Statistics about a run
///
/// One counter per outcome category plus the total number of paths seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of paths processed
    pub processed: usize,
    /// Number of files rewritten (or that would be, in a dry run)
    pub updated: usize,
    /// Number of files left untouched
    pub unchanged: usize,
    /// Number of configured paths that did not resolve to a file
    pub missing: usize,
}

impl RunStats {
    /// Records the outcome of one processed path
    pub fn record(&mut self, outcome: Outcome) {
        self.processed += 1;
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::NotFound => self.missing += 1,
        }
    }
}
