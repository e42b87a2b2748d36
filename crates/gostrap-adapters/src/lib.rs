//! Infrastructure adapters for gostrap.
//!
//! This crate implements the ports defined in `gostrap-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod toolchain;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use toolchain::GoToolchain;
