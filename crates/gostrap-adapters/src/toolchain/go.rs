//! `go` subprocess adapter.
//!
//! Runs `go mod init`, `go get -u` and `go mod tidy` with the project base
//! as working directory. Output is captured, not streamed; stderr is logged
//! at debug level and folded into the error on failure. Progress for the
//! user is reported by the assembler, one line per step.

use std::path::{Path, PathBuf};
use std::process::Command;

use gostrap_core::{
    application::{
        ApplicationError,
        ports::{DependencyInstaller, ModuleInitializer},
    },
    domain::{Dependency, ProjectName},
    error::GostrapResult,
};
use tracing::{debug, info};

/// Invokes the Go toolchain binary.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    binary: PathBuf,
}

impl GoToolchain {
    /// Use `binary` instead of `go` on `PATH`.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, base: &Path, args: &[&str]) -> GostrapResult<()> {
        let step = format!("go {}", args.join(" "));
        info!(step = %step, cwd = %base.display(), "running");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(base)
            .output()
            .map_err(|e| ApplicationError::Tooling {
                step: step.clone(),
                reason: format!("could not start {}: {}", self.binary.display(), e),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            debug!(step = %step, stderr = %stderr, "toolchain output");
        }

        if output.status.success() {
            return Ok(());
        }

        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            format!("exited with {}: {}", output.status, stderr)
        };
        Err(ApplicationError::Tooling { step, reason }.into())
    }
}

impl ModuleInitializer for GoToolchain {
    fn init_module(&self, base: &Path, name: &ProjectName) -> GostrapResult<()> {
        self.run(base, &["mod", "init", name.as_str()])
    }
}

impl DependencyInstaller for GoToolchain {
    fn install(&self, base: &Path, dependency: &Dependency) -> GostrapResult<()> {
        self.run(base, &["get", "-u", dependency.as_str()])
    }

    fn tidy(&self, base: &Path) -> GostrapResult<()> {
        self.run(base, &["mod", "tidy"])
    }
}
