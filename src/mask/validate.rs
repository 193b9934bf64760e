//! Post-edit validation against a user-supplied regular expression.
//!
//! Validation is advisory: the display commits regardless, and only the
//! emitted value is gated on the result.

use regex::{Regex, RegexBuilder};

use super::error::MaskError;

/// Outcome of validating one candidate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub candidate: String,
}

/// Test `candidate` against `pattern`, case-insensitively.
///
/// The match is a search, not anchored to the whole string. An invalid pattern
/// rejects every candidate instead of failing.
pub fn validate(candidate: &str, pattern: &str) -> bool {
    match Validation::compile(pattern) {
        Ok(validation) => validation.is_match(candidate),
        Err(err) => {
            tracing::warn!("{}", err);
            false
        }
    }
}

/// A validation pattern compiled once per field.
#[derive(Debug, Clone)]
pub struct Validation {
    pattern: String,
    regex: Option<Regex>,
}

impl Validation {
    /// Compile a case-insensitive validation pattern
    pub fn compile(pattern: &str) -> Result<Self, MaskError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MaskError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Some(regex),
        })
    }

    /// Like [`Validation::compile`], but an invalid pattern yields a validation
    /// that rejects everything.
    pub fn lenient(pattern: &str) -> Self {
        Self::compile(pattern).unwrap_or_else(|err| {
            tracing::warn!("{}; every value will be rejected", err);
            Self {
                pattern: pattern.to_string(),
                regex: None,
            }
        })
    }

    /// Validation that accepts every value
    pub fn accept_all() -> Self {
        Self::lenient("")
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// False when the pattern failed to compile
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(candidate))
    }

    pub fn check(&self, candidate: &str) -> ValidationResult {
        ValidationResult {
            accepted: self.is_match(candidate),
            candidate: candidate.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_pattern() {
        assert!(validate("(555) 123-4567", r"^\(\d{3}\) \d{3}-\d{4}$"));
        assert!(!validate("(555) 12#-####", r"^\(\d{3}\) \d{3}-\d{4}$"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(validate("ABC", "^abc$"));
    }

    #[test]
    fn test_unanchored_search() {
        assert!(validate("xx12yy", r"\d\d"));
    }

    #[test]
    fn test_empty_pattern_accepts_everything() {
        assert!(validate("anything", ""));
        assert!(Validation::accept_all().is_match(""));
    }

    #[test]
    fn test_invalid_pattern_rejects() {
        assert!(!validate("", "(unclosed"));
        assert!(!validate("(unclosed", "(unclosed"));
    }

    #[test]
    fn test_compile_surfaces_invalid_pattern() {
        let err = Validation::compile("[a-").unwrap_err();
        assert!(matches!(err, MaskError::InvalidPattern { .. }));
    }

    #[test]
    fn test_lenient_invalid_pattern() {
        let v = Validation::lenient("(unclosed");
        assert!(!v.is_valid());
        let result = v.check("12/34/5678");
        assert!(!result.accepted);
        assert_eq!(result.candidate, "12/34/5678");
    }
}
