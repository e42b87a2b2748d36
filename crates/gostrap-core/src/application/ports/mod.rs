//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gostrap-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateCatalog`: Template-id to body lookup
//!   - `ModuleInitializer`: `go mod init`
//!   - `DependencyInstaller`: `go get` and `go mod tidy`
//!   - `ProgressReporter`: per-stage and per-dependency progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`ProjectAssembler::run`, called by the CLI)

pub mod output;

pub use output::{
    DependencyInstaller, Filesystem, ModuleInitializer, Progress, ProgressReporter,
    TemplateCatalog,
};
