//! Project Assembler - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the project name and resolve the base path
//! 2. Create every planned directory
//! 3. Render each template and write it
//! 4. Initialise the Go module, unless `go.mod` is already there
//! 5. Install dependencies in declared order, then tidy
//!
//! Every failure is fatal. Nothing is rolled back: a re-run overwrites files,
//! tolerates directories that already exist and keeps an existing `go.mod`.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, field, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::ports::{
        DependencyInstaller, Filesystem, ModuleInitializer, Progress, ProgressReporter,
        TemplateCatalog,
    },
    domain::{
        BasePath, Dependency, LayoutPlan, LayoutPlanner, NameSubstitutor, Profile, ProjectName,
    },
    error::GostrapResult,
};

/// Raw caller input for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    /// Parent directory of the project; empty means the current directory.
    pub destination: String,
    pub profile: Profile,
}

impl ScaffoldRequest {
    pub fn new(
        project_name: impl Into<String>,
        destination: impl Into<String>,
        profile: Profile,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            destination: destination.into(),
            profile,
        }
    }
}

/// Stages of a run, in order. A failure in any stage moves the run to
/// `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssemblyStage {
    ValidatingInput,
    CreatingDirectories,
    WritingFiles,
    InitializingModule,
    InstallingDependencies,
    Done,
    Failed,
}

impl fmt::Display for AssemblyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ValidatingInput => "validating input",
            Self::CreatingDirectories => "creating directories",
            Self::WritingFiles => "writing files",
            Self::InitializingModule => "initializing module",
            Self::InstallingDependencies => "installing dependencies",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Validated input and the layout it expands to. Produced without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyPlan {
    pub project_name: ProjectName,
    pub base_path: BasePath,
    pub profile: Profile,
    pub layout: LayoutPlan,
    pub dependencies: Vec<Dependency>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub project_name: ProjectName,
    pub base_path: BasePath,
    pub profile: Profile,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub dependencies: Vec<Dependency>,
    pub generated_at: DateTime<Utc>,
}

impl ScaffoldReport {
    /// Commands the user runs next: enter the project, start the server.
    pub fn next_steps(&self) -> [String; 2] {
        [
            format!("cd \"{}\"", self.base_path),
            "go run cmd/main.go".to_string(),
        ]
    }
}

/// Discards progress. Used until a reporter is attached.
struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _progress: Progress<'_>) {}
}

/// Main generation service.
pub struct ProjectAssembler {
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn TemplateCatalog>,
    initializer: Box<dyn ModuleInitializer>,
    installer: Box<dyn DependencyInstaller>,
    progress: Box<dyn ProgressReporter>,
}

impl ProjectAssembler {
    /// Create a new assembler with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        catalog: Box<dyn TemplateCatalog>,
        initializer: Box<dyn ModuleInitializer>,
        installer: Box<dyn DependencyInstaller>,
    ) -> Self {
        Self {
            filesystem,
            catalog,
            initializer,
            installer,
            progress: Box::new(SilentProgress),
        }
    }

    /// Report each stage and each `go` step to `progress`.
    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Validate the request and expand it into a plan without touching disk
    /// or running any tool.
    ///
    /// Also checks that the catalog can serve every planned template, so a
    /// preview surfaces the same internal errors a real run would.
    pub fn preview(&self, request: &ScaffoldRequest) -> GostrapResult<AssemblyPlan> {
        let plan = Self::validate(request)?;
        for file in &plan.layout.files {
            self.catalog.get(file.template)?;
        }
        Ok(plan)
    }

    /// Generate a project.
    ///
    /// This is the main use case. Directories are created before any file is
    /// written; the module is initialised before any dependency is installed.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            profile = %request.profile,
            run_id = tracing::field::Empty,
        )
    )]
    pub fn run(&self, request: &ScaffoldRequest) -> GostrapResult<ScaffoldReport> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", field::display(run_id));

        let mut stage = AssemblyStage::ValidatingInput;
        match self.run_stages(request, &mut stage) {
            Ok(plan) => {
                info!(base = %plan.base_path, "Project generated");
                self.progress.report(Progress::Stage(AssemblyStage::Done));
                Ok(ScaffoldReport {
                    run_id,
                    directories: plan.layout.directory_paths().collect(),
                    files: plan.layout.file_targets().map(|(path, _)| path).collect(),
                    project_name: plan.project_name,
                    base_path: plan.base_path,
                    profile: plan.profile,
                    dependencies: plan.dependencies,
                    generated_at: Utc::now(),
                })
            }
            Err(e) => {
                warn!(stage = %stage, error = %e, "Run aborted");
                self.progress.report(Progress::Stage(AssemblyStage::Failed));
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_stages(
        &self,
        request: &ScaffoldRequest,
        stage: &mut AssemblyStage,
    ) -> GostrapResult<AssemblyPlan> {
        let plan = Self::validate(request)?;
        info!(base = %plan.base_path, "Input validated");

        self.enter(stage, AssemblyStage::CreatingDirectories);
        self.create_directories(&plan.layout)?;

        self.enter(stage, AssemblyStage::WritingFiles);
        self.write_files(&plan)?;

        self.enter(stage, AssemblyStage::InitializingModule);
        self.init_module(&plan)?;

        self.enter(stage, AssemblyStage::InstallingDependencies);
        self.install_dependencies(&plan)?;

        *stage = AssemblyStage::Done;
        Ok(plan)
    }

    fn enter(&self, stage: &mut AssemblyStage, next: AssemblyStage) {
        info!(stage = %next, "Stage");
        *stage = next;
        self.progress.report(Progress::Stage(next));
    }

    fn validate(request: &ScaffoldRequest) -> GostrapResult<AssemblyPlan> {
        let project_name = ProjectName::parse(request.project_name.as_str())?;
        let base_path = BasePath::resolve(&request.destination, &project_name);
        let layout = LayoutPlanner::plan(&base_path, request.profile);

        Ok(AssemblyPlan {
            project_name,
            base_path,
            profile: request.profile,
            layout,
            dependencies: request.profile.dependencies().to_vec(),
        })
    }

    fn create_directories(&self, layout: &LayoutPlan) -> GostrapResult<()> {
        for dir in layout.directory_paths() {
            debug!(path = %dir.display(), "Creating directory");
            self.filesystem.create_dir_all(&dir)?;
        }
        Ok(())
    }

    fn write_files(&self, plan: &AssemblyPlan) -> GostrapResult<()> {
        let substitutor = NameSubstitutor::new(&plan.project_name);

        for (path, template) in plan.layout.file_targets() {
            let body = self.catalog.get(template)?;
            let rendered = substitutor.render(&body);
            debug!(path = %path.display(), template = %template, "Writing file");
            self.filesystem.write_file(&path, &rendered)?;
        }
        Ok(())
    }

    fn init_module(&self, plan: &AssemblyPlan) -> GostrapResult<()> {
        let manifest = plan.base_path.join("go.mod");
        if self.filesystem.exists(&manifest) {
            info!(path = %manifest.display(), "go.mod already present, skipping init");
            self.progress.report(Progress::ModuleExists);
            return Ok(());
        }

        info!("Initialising Go module");
        self.initializer
            .init_module(plan.base_path.as_path(), &plan.project_name)
    }

    fn install_dependencies(&self, plan: &AssemblyPlan) -> GostrapResult<()> {
        let base = plan.base_path.as_path();

        for dependency in &plan.dependencies {
            info!(dependency = %dependency, "Installing dependency");
            self.progress.report(Progress::Installing(dependency));
            self.installer.install(base, dependency)?;
        }

        info!("Reconciling dependencies");
        self.progress.report(Progress::Tidying);
        self.installer.tidy(base)
    }
}
