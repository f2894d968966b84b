//! Transformation core
//!
//! This module contains the compiled parameter pattern, the text
//! transformation steps, the per-file pipeline, and the outcome type.

mod outcome;
mod pattern;
mod processor;
mod transform;

pub use outcome::{Outcome, completion_line};
pub use pattern::StripPattern;
pub use processor::process_file;
pub use transform::{prune_import, transform};
