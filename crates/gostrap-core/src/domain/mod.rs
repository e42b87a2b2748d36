// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for gostrap.
//!
//! This module contains pure logic with no I/O. Filesystem writes, template
//! storage and Go tooling are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Validated values**: `ProjectName` cannot hold an invalid name
//! - **Deterministic**: the same base path and profile always give the same plan
pub mod error;
pub mod layout;
pub mod substitution;
pub mod template;
pub mod value_objects;

pub use error::DomainError;
pub use layout::{DirectorySpec, FileSpec, LayoutPlan, LayoutPlanner};
pub use substitution::{NameSubstitutor, Placeholder};
pub use template::{TemplateBody, TemplateId};
pub use value_objects::{BasePath, Dependency, Profile, ProjectName};
