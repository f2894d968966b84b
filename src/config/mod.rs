//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{deserialize_expanded_paths, load_config, resolve_config_path};
pub use model::{Config, StripRule};
