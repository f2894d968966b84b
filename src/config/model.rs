//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{DEFAULT_ANNOTATION, DEFAULT_IMPORT, DEFAULT_PARAMETER, DEFAULT_TYPE_NAME};

use super::loader::deserialize_expanded_paths;

/// Configuration for the parameter stripper
///
/// Contains the ordered list of target files and the strip rule to apply.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Files to process, in order
    #[serde(deserialize_with = "deserialize_expanded_paths")]
    pub files: Vec<PathBuf>,
    /// The annotated parameter to strip and the import it guards
    #[serde(default)]
    pub rule: StripRule,
}

/// Description of the annotated parameter targeted for removal
///
/// All fields are literal tokens, not patterns; they are regex-escaped
/// before the substitution pattern is built. The defaults reproduce the
/// original use case of stripping a `@RequestHeader("X-User-Id")` UUID
/// parameter from Java controllers.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StripRule {
    /// Annotation token preceding the parameter
    #[serde(default = "default_annotation")]
    pub annotation: String,
    /// Type-name token of the parameter, also the guard for the import
    #[serde(default = "default_type_name")]
    pub type_name: String,
    /// Identifier of the parameter
    #[serde(default = "default_parameter")]
    pub parameter: String,
    /// Import declaration removed once the type name is no longer used
    #[serde(default = "default_import")]
    pub import: String,
}

fn default_annotation() -> String {
    DEFAULT_ANNOTATION.to_string()
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_string()
}

fn default_parameter() -> String {
    DEFAULT_PARAMETER.to_string()
}

fn default_import() -> String {
    DEFAULT_IMPORT.to_string()
}

impl Default for StripRule {
    fn default() -> Self {
        StripRule {
            annotation: default_annotation(),
            type_name: default_type_name(),
            parameter: default_parameter(),
            import: default_import(),
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// Target-file existence is deliberately not checked here: a missing
    /// file is a reportable per-file outcome, not a configuration error.
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(anyhow!(
                "No files specified in configuration. At least one target file is required."
            ));
        }

        self.rule.validate()
    }
}

impl StripRule {
    /// Validates the rule tokens
    ///
    /// # Errors
    /// Returns an error if any token is blank or if the parameter
    /// identifier contains whitespace
    pub fn validate(&self) -> Result<()> {
        if self.annotation.trim().is_empty() {
            return Err(anyhow!("Rule annotation must not be blank."));
        }
        if self.type_name.trim().is_empty() {
            return Err(anyhow!("Rule type name must not be blank."));
        }
        if self.parameter.trim().is_empty() {
            return Err(anyhow!("Rule parameter must not be blank."));
        }
        if self.parameter.chars().any(char::is_whitespace) {
            return Err(anyhow!(
                "Rule parameter '{}' must be a simple identifier without whitespace.",
                self.parameter
            ));
        }
        if self.import.trim().is_empty() {
            return Err(anyhow!("Rule import declaration must not be blank."));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_rule_default_matches_reference() {
        let rule = StripRule::default();
        assert_eq!(rule.annotation, "@RequestHeader(\"X-User-Id\")");
        assert_eq!(rule.type_name, "UUID");
        assert_eq!(rule.parameter, "usuarioId");
        assert_eq!(rule.import, "import java.util.UUID;");
    }

    #[test]
    fn test_validate_rejects_empty_file_list() {
        let config = Config {
            files: Vec::new(),
            rule: StripRule::default(),
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result.unwrap_err().to_string().contains("No files"),
            "Error should mention the empty file list"
        );
    }

    #[test]
    fn test_validate_rejects_blank_rule_token() {
        let config = Config {
            files: vec![PathBuf::from("/tmp/A.java")],
            rule: StripRule {
                type_name: "  ".to_string(),
                ..StripRule::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_parameter_with_whitespace() {
        let rule = StripRule {
            parameter: "usuario id".to_string(),
            ..StripRule::default()
        };
        let result = rule.validate();
        assert!(result.is_err());
        assert!(
            result.unwrap_err().to_string().contains("simple identifier"),
            "Error should explain the identifier constraint"
        );
    }

    #[test]
    fn test_validate_accepts_default_rule() {
        let config = Config {
            files: vec![PathBuf::from("/tmp/A.java")],
            rule: StripRule::default(),
        };
        assert!(config.validate().is_ok());
    }
}
