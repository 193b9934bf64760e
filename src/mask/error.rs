//! Error taxonomy for the masking engine.

/// Errors surfaced by the masking engine.
///
/// Neither is fatal to the host: an unsupported edit leaves the display untouched,
/// and an invalid pattern makes every candidate fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Multi-character or unrecognized raw edit
    UnsupportedEdit(String),
    /// Validation pattern failed to compile
    InvalidPattern { pattern: String, reason: String },
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::UnsupportedEdit(what) => write!(f, "Unsupported edit: {}", what),
            MaskError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern {:?}: {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for MaskError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MaskError::UnsupportedEdit("insertFromPaste".to_string());
        assert_eq!(err.to_string(), "Unsupported edit: insertFromPaste");

        let err = MaskError::InvalidPattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid pattern \"(\""));
    }
}
