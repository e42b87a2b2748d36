//! gostrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gostrap
//! Go project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gostrap-cli (CLI)             │
//! │   (prompts, config, logging, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProjectAssembler)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateCatalog,          │
//! │   ModuleInitializer, DependencyInstaller)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gostrap-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BuiltinCatalog,       │
//! │  GoToolchain)                           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, LayoutPlanner,            │
//! │  NameSubstitutor, Profile)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gostrap_core::prelude::*;
//!
//! let assembler = ProjectAssembler::new(filesystem, catalog, initializer, installer);
//! let report = assembler.run(&ScaffoldRequest::new("shopapi", "", Profile::Database))?;
//! println!("created {}", report.base_path.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssemblyPlan, AssemblyStage, ProjectAssembler, ScaffoldReport, ScaffoldRequest,
        ports::{
            DependencyInstaller, Filesystem, ModuleInitializer, Progress, ProgressReporter,
            TemplateCatalog,
        },
    };
    pub use crate::domain::{
        BasePath, Dependency, LayoutPlan, LayoutPlanner, NameSubstitutor, Placeholder, Profile,
        ProjectName, TemplateBody, TemplateId,
    };
    pub use crate::error::{ErrorCategory, GostrapError, GostrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
