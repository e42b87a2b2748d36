//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gostrap-adapters` crate provides implementations.

use std::path::Path;

use crate::application::services::AssemblyStage;
use crate::domain::{Dependency, ProjectName, TemplateBody, TemplateId};
use crate::error::GostrapResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gostrap_adapters::filesystem::LocalFilesystem` (production)
/// - `gostrap_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> GostrapResult<()>;

    /// Write content to a file, creating missing parents and overwriting
    /// any existing file.
    fn write_file(&self, path: &Path, content: &str) -> GostrapResult<()>;

    /// Check if path exists. Used to detect a module manifest left by an
    /// earlier run.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `gostrap_adapters::catalog::BuiltinCatalog` (templates compiled into the binary)
pub trait TemplateCatalog: Send + Sync {
    /// Get the body for a template id.
    ///
    /// A missing id is an internal error: the catalog and the layout plan are
    /// both fixed at build time.
    fn get(&self, id: TemplateId) -> GostrapResult<TemplateBody>;
}

/// Port for creating the Go module manifest.
///
/// Implemented by:
/// - `gostrap_adapters::toolchain::GoToolchain` (`go mod init`)
#[cfg_attr(test, mockall::automock)]
pub trait ModuleInitializer: Send + Sync {
    /// Initialise the module named `name` inside `base`.
    fn init_module(&self, base: &Path, name: &ProjectName) -> GostrapResult<()>;
}

/// Port for fetching and reconciling dependencies.
///
/// Implemented by:
/// - `gostrap_adapters::toolchain::GoToolchain` (`go get -u`, `go mod tidy`)
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// Install one dependency into the module at `base`.
    fn install(&self, base: &Path, dependency: &Dependency) -> GostrapResult<()>;

    /// Reconcile the manifest after every dependency is installed.
    fn tidy(&self, base: &Path) -> GostrapResult<()>;
}

/// A step the assembler is about to take, for user-facing progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// Entered a new stage. `Done` and `Failed` are always the last event.
    Stage(AssemblyStage),
    /// `go.mod` already exists under the base path; module init is skipped.
    ModuleExists,
    Installing(&'a Dependency),
    Tidying,
}

/// Port for reporting progress while a run is underway.
///
/// Implemented by:
/// - `gostrap_cli::commands::scaffold::TerminalProgress` (human/plain output)
pub trait ProgressReporter: Send + Sync {
    fn report(&self, progress: Progress<'_>);
}
