//! Text transformation steps
//!
//! Parameter removal followed by guarded import pruning. Both steps are
//! purely textual; neither parses the host language.

use crate::config::StripRule;

use super::pattern::StripPattern;

/// Applies both transformation steps to the content
///
/// Returns the transformed content; the caller decides whether anything
/// changed by comparing with the original.
pub fn transform(content: &str, pattern: &StripPattern, rule: &StripRule) -> String {
    let stripped = pattern.strip(content);
    prune_import(&stripped, rule)
}

/// Removes the guarded import line when its type name has no remaining use
///
/// The check scans the raw text with the literal import declaration
/// excluded. It is an appears-elsewhere substring heuristic, not a
/// scope-aware usage analysis: a type name mentioned in a comment or a
/// string literal keeps the import.
pub fn prune_import(content: &str, rule: &StripRule) -> String {
    let without_import = content.replace(&rule.import, "");
    if without_import.contains(&rule.type_name) {
        return content.to_string();
    }
    let import_line = format!("{}\n", rule.import);
    content.replace(&import_line, "")
}
