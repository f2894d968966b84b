//! Substitution pattern for the annotated parameter
//!
//! The pattern is built from the rule's literal tokens and compiled once
//! per run.

use regex::{Regex, escape};

use crate::config::StripRule;
use crate::errors::{Result, pattern_matching_error};

/// Compiled pattern matching the annotated parameter in its expected layout
///
/// Matches the annotation token, whitespace, the type-name token,
/// whitespace, the parameter identifier, a trailing comma, and any
/// whitespace up to and including the newline plus the next line's leading
/// whitespace. The pattern is intentionally narrow: it recognises only
/// this exact triple in this exact layout and is not a declaration parser.
#[derive(Debug, Clone)]
pub struct StripPattern {
    regex: Regex,
}

impl StripPattern {
    /// Compiles the substitution pattern from the rule's literal tokens
    ///
    /// # Errors
    /// Returns an error if the assembled pattern fails to compile
    pub fn compile(rule: &StripRule) -> Result<StripPattern> {
        let pattern = format!(
            r"{}\s+{}\s+{},\s*\n\s*",
            escape(&rule.annotation),
            escape(&rule.type_name),
            escape(&rule.parameter),
        );
        let regex = Regex::new(&pattern).map_err(|e| pattern_matching_error(e, &pattern))?;
        Ok(StripPattern { regex })
    }

    /// Removes every non-overlapping match of the pattern from the content
    pub fn strip(&self, content: &str) -> String {
        self.regex.replace_all(content, "").to_string()
    }

    /// Checks whether the content contains at least one match
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_default_rule() {
        let pattern = StripPattern::compile(&StripRule::default()).unwrap();
        let content = "@RequestHeader(\"X-User-Id\") UUID usuarioId,\n        Long id";
        assert!(pattern.is_match(content));
    }

    #[test]
    fn test_rule_tokens_are_escaped() {
        // The annotation contains regex metacharacters; they must match
        // literally rather than as pattern syntax.
        let rule = StripRule {
            annotation: "@Header(\"X-(Weird)-Id\")".to_string(),
            ..StripRule::default()
        };
        let pattern = StripPattern::compile(&rule).unwrap();
        let content = "@Header(\"X-(Weird)-Id\") UUID usuarioId,\n    Long id";
        assert!(pattern.is_match(content));
    }

    #[test]
    fn test_no_match_without_trailing_comma() {
        let pattern = StripPattern::compile(&StripRule::default()).unwrap();
        let content = "@RequestHeader(\"X-User-Id\") UUID usuarioId) {";
        assert!(!pattern.is_match(content));
    }

    #[test]
    fn test_no_match_without_line_continuation() {
        // The comma must be followed by a newline; a same-line parameter
        // list is outside the recognised layout.
        let pattern = StripPattern::compile(&StripRule::default()).unwrap();
        let content = "@RequestHeader(\"X-User-Id\") UUID usuarioId, Long id) {";
        assert!(!pattern.is_match(content));
    }

    #[test]
    fn test_strip_consumes_continuation_whitespace() {
        let pattern = StripPattern::compile(&StripRule::default()).unwrap();
        let content = "method(@RequestHeader(\"X-User-Id\") UUID usuarioId,\n        Long id) {";
        assert_eq!(pattern.strip(content), "method(Long id) {");
    }
}
