//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, ValueEnum};

use gostrap_core::domain::Profile;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gostrap",
    bin_name = "gostrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a ready-to-run Go web service",
    long_about = "gostrap creates a Gin web service skeleton (routes, controller, \
                  model, service, config, .env), initialises the Go module and \
                  installs its dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 gostrap                             # prompt for name and destination\n\
        \x20 gostrap shopapi                     # ./shopapi, database profile\n\
        \x20 gostrap shopapi ~/src --profile minimal\n\
        \x20 gostrap shopapi --dry-run --output-format json",
)]
pub struct Cli {
    /// Flags controlling logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and where.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments describing the project to generate.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Project name, used as directory name and Go module path.
    /// Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted if omitted)")]
    pub name: Option<String>,

    /// Parent directory of the project.  Empty means the current directory.
    /// Prompted for when omitted and not set in the configuration.
    #[arg(
        value_name = "DEST",
        help = "Destination directory (prompted if omitted)"
    )]
    pub destination: Option<String>,

    /// Which skeleton to generate.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        value_enum,
        help = "Project profile [default: from config, else database]"
    )]
    pub profile: Option<ProfileArg>,

    /// Print the plan without creating anything or running `go`.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project profiles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProfileArg {
    /// Gin + godotenv, no database layer.
    #[value(alias = "min")]
    Minimal,
    /// Gin + godotenv + GORM with the MySQL driver.
    #[value(alias = "db")]
    Database,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Minimal => Profile::Minimal,
            ProfileArg::Database => Profile::Database,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
