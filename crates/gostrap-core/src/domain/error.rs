// ============================================================================
// domain/error.rs - INPUT VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised only while validating caller input, so every variant maps to the
/// `InvalidInput` category and is returned before anything touches disk.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid input: project name '{name}' {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid input: unknown profile '{0}'")]
    UnknownProfile(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Enter a project name, e.g. `shopapi`".into(),
                "The name becomes both the directory and the Go module path".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{}' {}", name, reason),
                "Use letters, digits, '-', '_', '~' or '.' (not leading)".into(),
                "Examples: shopapi, shop-api, shop_api".into(),
            ],
            Self::UnknownProfile(_) => vec![
                "Available profiles:".into(),
                "  • minimal   - Gin + godotenv".into(),
                "  • database  - Gin + godotenv + GORM (MySQL)".into(),
            ],
        }
    }
}
