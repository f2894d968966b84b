//! Per-file outcome classification and rendering

use std::path::Path;

use colored::Colorize;

use crate::logging::format_message;

/// Result of processing a single target file
///
/// Derived purely from file existence and whether the transformed content
/// differs from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The path did not resolve to a readable file; nothing was done
    NotFound,
    /// The content changed and the file was rewritten
    Updated,
    /// The content was already in its final form; no write occurred
    Unchanged,
}

impl Outcome {
    /// Status glyph for the transcript line
    pub fn glyph(&self) -> &'static str {
        match self {
            Outcome::NotFound => "❌",
            Outcome::Updated => "✅",
            Outcome::Unchanged => "⚠️",
        }
    }

    /// Renders the transcript line for this outcome
    ///
    /// A missing file is reported with its full path; for processed files
    /// the base name is enough context.
    pub fn report_line(&self, path: &Path) -> String {
        let plain = match self {
            Outcome::NotFound => format!("{} File not found: {}", self.glyph(), path.display()),
            Outcome::Updated => format!("{} Updated: {}", self.glyph(), base_name(path)),
            Outcome::Unchanged => format!("{} No changes: {}", self.glyph(), base_name(path)),
        };
        let colored = match self {
            Outcome::NotFound => plain.as_str().red().to_string(),
            Outcome::Updated => plain.as_str().green().to_string(),
            Outcome::Unchanged => plain.as_str().yellow().to_string(),
        };
        format_message(&plain, &colored)
    }
}

/// Renders the final transcript line emitted after all paths are processed
pub fn completion_line() -> String {
    let plain = "✅ Processing complete!".to_string();
    format_message(&plain, &plain.as_str().green().to_string())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
