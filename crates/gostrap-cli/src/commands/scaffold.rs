//! Implementation of the default `gostrap [NAME] [DEST]` command.
//!
//! Responsibility: turn arguments, prompts and config into a
//! `ScaffoldRequest`, call the core assembler, and display results. No
//! business logic lives here.

use tracing::{debug, info, instrument, warn};

use gostrap_adapters::{BuiltinCatalog, GoToolchain, LocalFilesystem};
use gostrap_core::{
    application::{
        AssemblyPlan, AssemblyStage, ProjectAssembler, ScaffoldReport, ScaffoldRequest,
        ports::{Progress, ProgressReporter},
    },
    domain::Profile,
};

use crate::{
    cli::{OutputFormat, ScaffoldArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the scaffold command.
///
/// Dispatch sequence:
/// 1. Resolve name, destination and profile (args, then config, then prompt)
/// 2. Build the assembler over the local filesystem and the Go toolchain
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Run the assembler, printing a line per step, and print the report
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = resolve_request(&args, &config)?;
    debug!(
        project = %request.project_name,
        destination = %request.destination,
        profile = %request.profile,
        "Request resolved"
    );

    let assembler = build_assembler(&config, &output);

    if args.dry_run {
        let plan = assembler.preview(&request)?;
        return show_plan(&plan, &output);
    }

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Creating '{}' ({} profile)...",
            request.project_name, request.profile
        ))?;
    }
    info!(go = %config.toolchain.go_binary.display(), "Assembly started");

    let report = assembler.run(&request)?;
    show_report(&report, &output)
}

// ── Request resolution ───────────────────────────────────────────────────────

fn resolve_request(args: &ScaffoldArgs, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::project_name()?,
    };

    let destination = match (&args.destination, &config.defaults.destination) {
        (Some(dest), _) => dest.clone(),
        (None, Some(dest)) => dest.clone(),
        (None, None) => prompt::destination()?,
    };

    let profile = args
        .profile
        .map(Profile::from)
        .unwrap_or(config.defaults.profile);

    Ok(ScaffoldRequest::new(name, destination, profile))
}

fn build_assembler(config: &AppConfig, output: &OutputManager) -> ProjectAssembler {
    let go = GoToolchain::new(&config.toolchain.go_binary);
    let assembler = ProjectAssembler::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinCatalog::new()),
        Box::new(go.clone()),
        Box::new(go),
    );

    // JSON output is a single document; progress lines would corrupt it.
    if output.format() == OutputFormat::Json {
        assembler
    } else {
        assembler.with_progress(Box::new(TerminalProgress::new(output.clone())))
    }
}

// ── Progress ─────────────────────────────────────────────────────────────────

/// Prints one line per stage and per `go` step. Quiet mode silences it
/// through `OutputManager`.
struct TerminalProgress {
    output: OutputManager,
}

impl TerminalProgress {
    fn new(output: OutputManager) -> Self {
        Self { output }
    }

    fn message(progress: Progress<'_>) -> Option<String> {
        let msg = match progress {
            Progress::Stage(AssemblyStage::CreatingDirectories) => "Creating directories...".into(),
            Progress::Stage(AssemblyStage::WritingFiles) => "Writing files...".into(),
            Progress::Stage(AssemblyStage::InitializingModule) => "Creating go.mod...".into(),
            Progress::Stage(AssemblyStage::InstallingDependencies) => {
                "Installing dependencies...".into()
            }
            Progress::Stage(_) => return None,
            Progress::ModuleExists => "go.mod already exists, keeping it".into(),
            Progress::Installing(dependency) => format!("  Installing {dependency}..."),
            Progress::Tidying => "  Running go mod tidy...".into(),
        };
        Some(msg)
    }
}

impl ProgressReporter for TerminalProgress {
    fn report(&self, progress: Progress<'_>) {
        let Some(msg) = Self::message(progress) else {
            return;
        };
        if let Err(e) = self.output.info(&msg) {
            warn!(error = %e, "Failed to print progress");
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn show_plan(plan: &AssemblyPlan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.project_name, plan.base_path
    ))?;
    output.print(&format!("  Profile:      {}", plan.profile))?;
    output.print("  Directories:")?;
    for dir in plan.layout.directory_paths() {
        output.print(&format!("    {}", dir.display()))?;
    }
    output.print("  Files:")?;
    for (path, template) in plan.layout.file_targets() {
        output.print(&format!("    {}  ({template})", path.display()))?;
    }
    output.print("  Commands:")?;
    output.print(&format!("    go mod init {}", plan.project_name))?;
    for dependency in &plan.dependencies {
        output.print(&format!("    go get -u {dependency}"))?;
    }
    output.print("    go mod tidy")?;
    Ok(())
}

fn show_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created at {}",
        report.project_name, report.base_path
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    for step in report.next_steps() {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProfileArg;
    use gostrap_core::domain::Dependency;

    fn args(name: &str, destination: Option<&str>, profile: Option<ProfileArg>) -> ScaffoldArgs {
        ScaffoldArgs {
            name: Some(name.into()),
            destination: destination.map(Into::into),
            profile,
            dry_run: false,
        }
    }

    #[test]
    fn args_win_over_config() {
        let mut config = AppConfig::default();
        config.defaults.destination = Some("/from/config".into());
        config.defaults.profile = Profile::Minimal;

        let request = resolve_request(
            &args("shopapi", Some("/from/args"), Some(ProfileArg::Database)),
            &config,
        )
        .unwrap();

        assert_eq!(request.project_name, "shopapi");
        assert_eq!(request.destination, "/from/args");
        assert_eq!(request.profile, Profile::Database);
    }

    #[test]
    fn config_fills_missing_destination_and_profile() {
        let mut config = AppConfig::default();
        config.defaults.destination = Some("/srv".into());
        config.defaults.profile = Profile::Minimal;

        let request = resolve_request(&args("shopapi", None, None), &config).unwrap();

        assert_eq!(request.destination, "/srv");
        assert_eq!(request.profile, Profile::Minimal);
    }

    #[test]
    fn default_profile_is_database() {
        let request =
            resolve_request(&args("shopapi", Some(""), None), &AppConfig::default()).unwrap();
        assert_eq!(request.profile, Profile::Database);
        assert_eq!(request.destination, "");
    }

    #[test]
    fn progress_messages_cover_tool_steps() {
        let gin = Dependency::new("github.com/gin-gonic/gin");

        assert_eq!(
            TerminalProgress::message(Progress::Installing(&gin)).as_deref(),
            Some("  Installing github.com/gin-gonic/gin...")
        );
        assert_eq!(
            TerminalProgress::message(Progress::Stage(AssemblyStage::InitializingModule))
                .as_deref(),
            Some("Creating go.mod...")
        );
        assert!(TerminalProgress::message(Progress::Stage(AssemblyStage::Done)).is_none());
        assert!(TerminalProgress::message(Progress::Stage(AssemblyStage::Failed)).is_none());
    }

    #[test]
    fn raw_name_is_passed_through_for_core_validation() {
        let request =
            resolve_request(&args("  ", Some(""), None), &AppConfig::default()).unwrap();
        assert_eq!(request.project_name, "  ");
    }
}
