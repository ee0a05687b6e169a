//! Error types for slipbox

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slipbox
#[derive(Debug, Error)]
pub enum SlipboxError {
    #[error("Not a slipbox directory: {0}")]
    NotSlipboxDirectory(PathBuf),

    #[error("Invalid document name: {0}")]
    InvalidDocumentName(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SlipboxError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SlipboxError::NotSlipboxDirectory(_) => 2,
            SlipboxError::InvalidDocumentName(_) => 3,
            SlipboxError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SlipboxError::NotSlipboxDirectory(path) => {
                format!(
                    "Not a slipbox directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'slipbox init' in this directory to create a workspace\n\
                    • Navigate to an existing slipbox directory\n\
                    • Pass --root or set SLIPBOX_ROOT to your workspace path",
                    path.display()
                )
            }
            SlipboxError::NotFound(name) => {
                format!(
                    "Document not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'slipbox list' to see available documents\n\
                    • Document names are derived from their first line",
                    name
                )
            }
            SlipboxError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: slipbox config port 8080",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SlipboxError
pub type Result<T> = std::result::Result<T, SlipboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_slipbox_directory_suggestion() {
        let err = SlipboxError::NotSlipboxDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("slipbox init"));
        assert!(msg.contains("SLIPBOX_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_not_found_suggestions() {
        let err = SlipboxError::NotFound("missing.md".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("slipbox list"));
        assert!(msg.contains("missing.md"));
    }

    #[test]
    fn test_unknown_config_key_example() {
        let err = SlipboxError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("slipbox config port 8080"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SlipboxError::NotSlipboxDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(SlipboxError::InvalidDocumentName("x".into()).exit_code(), 3);
        assert_eq!(SlipboxError::NotFound("x".into()).exit_code(), 4);
        assert_eq!(SlipboxError::Internal("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = SlipboxError::Internal("worker panicked".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Internal error: worker panicked");
    }
}
