//! Project skeleton planning.
//!
//! A plan is a pure function of the base path and the profile: seven
//! directories, then eight files, always in the same order.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{template::TemplateId, value_objects::BasePath, value_objects::Profile};

/// Directories of the project skeleton, relative to the base path.
const DIRECTORIES: &[&str] = &[
    "cmd",
    "app/routes",
    "app/controllers",
    "app/models",
    "app/services",
    "app/utils",
    "app/config",
];

/// A directory to create, relative to the base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySpec {
    pub path: PathBuf,
}

/// A file to render from a catalog template, relative to the base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSpec {
    pub path: PathBuf,
    pub template: TemplateId,
}

/// The full, ordered skeleton for one run.
///
/// Invariant: every file's parent directory is either the base path itself
/// or one of `directories`, so creating all directories first is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    pub root: PathBuf,
    pub directories: Vec<DirectorySpec>,
    pub files: Vec<FileSpec>,
}

impl LayoutPlan {
    /// Absolute (base-prefixed) directory paths in creation order.
    pub fn directory_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.directories.iter().map(|d| self.root.join(&d.path))
    }

    /// Base-prefixed file paths paired with their template ids, in write order.
    pub fn file_targets(&self) -> impl Iterator<Item = (PathBuf, TemplateId)> + '_ {
        self.files
            .iter()
            .map(|f| (self.root.join(&f.path), f.template))
    }
}

/// Produces the fixed project skeleton for a profile.
pub struct LayoutPlanner;

impl LayoutPlanner {
    pub fn plan(base: &BasePath, profile: Profile) -> LayoutPlan {
        let directories = DIRECTORIES
            .iter()
            .map(|d| DirectorySpec {
                path: PathBuf::from(*d),
            })
            .collect();

        let files = Self::files_for(profile)
            .iter()
            .map(|&(path, template)| FileSpec {
                path: PathBuf::from(path),
                template,
            })
            .collect();

        LayoutPlan {
            root: base.as_path().to_path_buf(),
            directories,
            files,
        }
    }

    fn files_for(profile: Profile) -> &'static [(&'static str, TemplateId)] {
        match profile {
            Profile::Minimal => &[
                ("cmd/main.go", TemplateId::EntrypointMinimal),
                ("app/config/config.go", TemplateId::ConfigMinimal),
                ("app/models/user.go", TemplateId::UserModelMinimal),
                ("app/routes/routes.go", TemplateId::Routes),
                ("app/controllers/home_controller.go", TemplateId::HomeController),
                ("app/services/user_service.go", TemplateId::UserService),
                ("app/utils/hash.go", TemplateId::HashUtil),
                (".env", TemplateId::EnvMinimal),
            ],
            Profile::Database => &[
                ("cmd/main.go", TemplateId::EntrypointDatabase),
                ("app/config/config.go", TemplateId::ConfigDatabase),
                ("app/models/user.go", TemplateId::UserModelDatabase),
                ("app/routes/routes.go", TemplateId::Routes),
                ("app/controllers/home_controller.go", TemplateId::HomeController),
                ("app/services/user_service.go", TemplateId::UserService),
                ("app/utils/hash.go", TemplateId::HashUtil),
                (".env", TemplateId::EnvDatabase),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::Path;

    use super::*;
    use crate::domain::value_objects::ProjectName;

    fn base(dest: &str, name: &str) -> BasePath {
        BasePath::resolve(dest, &ProjectName::parse(name).unwrap())
    }

    #[test]
    fn plan_is_deterministic() {
        for profile in Profile::ALL {
            let a = LayoutPlanner::plan(&base("", "shopapi"), profile);
            let b = LayoutPlanner::plan(&base("", "shopapi"), profile);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn plans_differ_only_by_root() {
        let a = LayoutPlanner::plan(&base("", "shopapi"), Profile::Database);
        let b = LayoutPlanner::plan(&base("/srv", "other"), Profile::Database);
        assert_eq!(a.directories, b.directories);
        assert_eq!(a.files, b.files);
        assert_ne!(a.root, b.root);
    }

    #[test]
    fn shopapi_directories_are_prefixed() {
        let plan = LayoutPlanner::plan(&base("", "shopapi"), Profile::Minimal);
        let dirs: Vec<PathBuf> = plan.directory_paths().collect();
        assert_eq!(dirs[0], PathBuf::from("./shopapi/cmd"));
        assert!(dirs.contains(&PathBuf::from("./shopapi/app/routes")));
        assert!(dirs.contains(&PathBuf::from("./shopapi/app/config")));
        assert_eq!(dirs.len(), 7);
    }

    #[test]
    fn every_file_parent_is_planned() {
        for profile in Profile::ALL {
            let plan = LayoutPlanner::plan(&base("", "shopapi"), profile);
            let dirs: HashSet<&Path> = plan.directories.iter().map(|d| d.path.as_path()).collect();
            for file in &plan.files {
                let parent = file.path.parent().unwrap_or(Path::new(""));
                assert!(
                    parent.as_os_str().is_empty() || dirs.contains(parent),
                    "{} has no planned parent",
                    file.path.display()
                );
            }
        }
    }

    #[test]
    fn file_paths_are_unique_and_relative() {
        for profile in Profile::ALL {
            let plan = LayoutPlanner::plan(&base("", "shopapi"), profile);
            let mut seen = HashSet::new();
            for file in &plan.files {
                assert!(file.path.is_relative());
                assert!(seen.insert(&file.path), "duplicate {}", file.path.display());
            }
        }
    }

    #[test]
    fn profiles_share_paths_but_not_all_templates() {
        let minimal = LayoutPlanner::plan(&base("", "x"), Profile::Minimal);
        let database = LayoutPlanner::plan(&base("", "x"), Profile::Database);

        let paths = |p: &LayoutPlan| p.files.iter().map(|f| f.path.clone()).collect::<Vec<_>>();
        assert_eq!(paths(&minimal), paths(&database));

        assert!(
            database
                .files
                .iter()
                .any(|f| f.template == TemplateId::ConfigDatabase)
        );
        assert!(
            !minimal
                .files
                .iter()
                .any(|f| f.template == TemplateId::ConfigDatabase)
        );
    }

    #[test]
    fn entrypoint_and_env_are_planned() {
        let plan = LayoutPlanner::plan(&base("", "shopapi"), Profile::Database);
        let targets: Vec<(PathBuf, TemplateId)> = plan.file_targets().collect();
        assert_eq!(
            targets[0],
            (
                PathBuf::from("./shopapi/cmd/main.go"),
                TemplateId::EntrypointDatabase
            )
        );
        assert_eq!(
            targets.last().unwrap(),
            &(PathBuf::from("./shopapi/.env"), TemplateId::EnvDatabase)
        );
    }
}
