//! Application layer for gostrap.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ProjectAssembler`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences side effects; the rules about names,
//! layouts and substitution live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AssemblyPlan, AssemblyStage, ProjectAssembler, ScaffoldReport, ScaffoldRequest,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    DependencyInstaller, Filesystem, ModuleInitializer, Progress, ProgressReporter,
    TemplateCatalog,
};

pub use error::ApplicationError;
