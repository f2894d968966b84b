//! Workflow module
//!
//! This module contains the components that orchestrate a run.

mod context;
mod engine;

pub use context::RunStats;
pub use engine::{RunOptions, run};
