//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::utils::{expand_path, find_project_folder};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<Config> {
    let file_content = fs::read(&file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config: Config = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    config.validate()?;

    debug!("Loaded configuration from {}", file.display());
    info!("Configuration lists {} target files", config.files.len());

    Ok(config)
}

/// Resolves the configuration file path
///
/// When the given path does not exist, falls back to the same filename in
/// the platform's standard configuration directory for this application.
///
/// # Arguments
/// * `config` - Path to the configuration file
///
/// # Returns
/// * `Result<PathBuf>` - The resolved path or an error
///
/// # Errors
/// Returns an error if the standard configuration directory cannot be determined
pub fn resolve_config_path(config: PathBuf) -> Result<PathBuf> {
    if config.exists() {
        Ok(config)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(config))
    }
}

/// Deserializes the target file list, expanding a leading tilde in each entry
pub fn deserialize_expanded_paths<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct ExpandedPathVisitor;

    impl<'de> serde::de::Visitor<'de> for ExpandedPathVisitor {
        type Value = Vec<PathBuf>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("array of path strings")
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut paths = Vec::new();
            while let Some(entry) = seq.next_element::<String>()? {
                paths.push(expand_path(&entry));
            }
            Ok(paths)
        }
    }

    deserializer.deserialize_seq(ExpandedPathVisitor)
}
