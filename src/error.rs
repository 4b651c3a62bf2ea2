//! Error types for the bob CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::templates::TemplateError;
use thiserror::Error;

/// Main error type for bob operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum BobError {
    /// The requested agent type has no registered adapter.
    #[error("Unsupported agent type: {requested}. Supported: {}", supported.join(", "))]
    UnsupportedAgent {
        requested: String,
        supported: Vec<String>,
    },

    /// User provided invalid arguments or the target is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Doctor checks found issues that were not repaired.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Template lookup, rendering, or frontmatter validation failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A filesystem operation failed.
    #[error("{0}")]
    IoError(String),
}

impl BobError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BobError::UnsupportedAgent { .. } => exit_codes::USER_ERROR,
            BobError::UserError(_) => exit_codes::USER_ERROR,
            BobError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            BobError::Template(TemplateError::NotFound { .. }) => exit_codes::USER_ERROR,
            BobError::Template(TemplateError::Load { .. }) => exit_codes::IO_FAILURE,
            BobError::Template(_) => exit_codes::TEMPLATE_DEFECT,
            BobError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an I/O failure with the path and the action that failed.
    pub fn io(action: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        BobError::IoError(format!("failed to {} '{}': {}", action, path.display(), err))
    }
}

/// Result type alias for bob operations.
pub type Result<T> = std::result::Result<T, BobError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn unsupported_agent_lists_supported_types() {
        let err = BobError::UnsupportedAgent {
            requested: "vim".to_string(),
            supported: vec!["claude-code".to_string(), "cursor".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported agent type: vim. Supported: claude-code, cursor"
        );
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = BobError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = BobError::ValidationError("2 issue(s) found".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert_eq!(err.to_string(), "Validation failed: 2 issue(s) found");
    }

    #[test]
    fn template_not_found_is_a_user_error() {
        let err = BobError::from(TemplateError::NotFound {
            name: "workflows/nope.md".to_string(),
            available: vec![],
        });
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn malformed_metadata_is_a_template_defect() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err = BobError::from(TemplateError::MalformedMetadata {
            name: "rules/configure_rules.md".to_string(),
            source: yaml_err,
        });
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_DEFECT);
    }

    #[test]
    fn io_error_includes_path_and_action() {
        let err = BobError::io(
            "read",
            Path::new("/tmp/settings.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert_eq!(
            err.to_string(),
            "failed to read '/tmp/settings.json': missing"
        );
    }
}
