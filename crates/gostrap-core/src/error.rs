//! Unified error handling for gostrap Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a category used by the CLI to
//! pick an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for gostrap Core operations.
///
/// Every variant is fatal for the run that produced it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GostrapError {
    /// Errors from the domain layer (input rejected before any side effect).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem or tooling failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GostrapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in gostrap".into(),
                "Please report it together with the output of `gostrap -vv`".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::InvalidInput,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Project name or destination rejected.
    InvalidInput,
    /// Directory or file creation failed.
    Filesystem,
    /// Module initialisation or dependency installation failed.
    Tooling,
    /// Configuration could not be loaded.
    Configuration,
    /// Catalog and plan out of sync, or any other bug.
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvalidInput => "invalid input",
            Self::Filesystem => "filesystem error",
            Self::Tooling => "tooling error",
            Self::Configuration => "configuration error",
            Self::Internal => "internal error",
        };
        f.write_str(s)
    }
}

/// Convenient result type alias.
pub type GostrapResult<T> = Result<T, GostrapError>;
