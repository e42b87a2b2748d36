//! Application services - orchestrate use cases.
//!
//! `ProjectAssembler` sequences the whole "generate a project" use case over
//! the driven ports.

pub mod assembler;

pub use assembler::{
    AssemblyPlan, AssemblyStage, ProjectAssembler, ScaffoldReport, ScaffoldRequest,
};
