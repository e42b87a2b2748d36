//! Application layer errors.
//!
//! These errors represent failures while performing side effects, not input
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// Errors that occur during assembly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Directory or file creation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external Go tool failed or could not be started.
    #[error("`{step}` failed: {reason}")]
    Tooling { step: String, reason: String },

    /// The plan references a template the catalog does not provide.
    #[error("Template '{id}' is missing from the catalog")]
    TemplateNotFound { id: TemplateId },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-running is safe: existing files are overwritten".into(),
            ],
            Self::Tooling { step, .. } => vec![
                format!("Command failed: {}", step),
                "Ensure the Go toolchain is installed and on your PATH".into(),
                "Check network access to the Go module proxy".into(),
                "Set toolchain.go_binary in the config to use a specific `go`".into(),
            ],
            Self::TemplateNotFound { .. } => vec![
                "The builtin template catalog is incomplete".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::Tooling { .. } => ErrorCategory::Tooling,
            Self::TemplateNotFound { .. } => ErrorCategory::Internal,
        }
    }
}
