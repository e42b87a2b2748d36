//! Value objects: validated project name, resolved base path, profiles and
//! the dependencies they pull in.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ============================================================================
// ProjectName
// ============================================================================

/// Project name, used verbatim as directory name and Go module path.
///
/// Invariant: non-empty, made only of Go module path characters
/// (`A-Z a-z 0-9 . _ ~ -`), no leading `.` or `-`, no trailing `.`.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        if raw.starts_with('.') {
            return Err(invalid(&raw, "cannot start with '.'"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid(&raw, "cannot contain path separators"));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid(&raw, "cannot contain whitespace or control characters"));
        }
        if raw.starts_with('-') {
            return Err(invalid(&raw, "cannot start with '-'"));
        }
        if raw.ends_with('.') {
            return Err(invalid(&raw, "cannot end with '.'"));
        }
        if let Some(c) = raw.chars().find(|&c| !is_module_path_char(c)) {
            return Err(invalid(
                &raw,
                &format!("contains '{c}', which is not allowed in a Go module path"),
            ));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_module_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '-')
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// BasePath
// ============================================================================

/// Root directory of the generated project: `<destination>/<name>`, or
/// `./<name>` when no destination was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasePath(PathBuf);

impl BasePath {
    pub fn resolve(destination: &str, name: &ProjectName) -> Self {
        let parent = if destination.trim().is_empty() {
            Path::new(".")
        } else {
            Path::new(destination)
        };
        Self(parent.join(name.as_str()))
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

}

impl AsRef<Path> for BasePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// ============================================================================
// Dependency
// ============================================================================

/// A Go package identifier handed to `go get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Dependency(&'static str);

impl Dependency {
    pub const fn new(module: &'static str) -> Self {
        Self(module)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const GIN: Dependency = Dependency::new("github.com/gin-gonic/gin");
const GODOTENV: Dependency = Dependency::new("github.com/joho/godotenv");
const GORM: Dependency = Dependency::new("gorm.io/gorm");
const GORM_MYSQL: Dependency = Dependency::new("gorm.io/driver/mysql");

const MINIMAL_DEPENDENCIES: &[Dependency] = &[GIN, GODOTENV];
const DATABASE_DEPENDENCIES: &[Dependency] = &[GIN, GODOTENV, GORM, GORM_MYSQL];

// ============================================================================
// Profile
// ============================================================================

/// Generator variant: which files are rendered and which dependencies are
/// installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Gin + godotenv, no database layer.
    Minimal,
    /// Gin + godotenv + GORM/MySQL with an explicit connection object.
    #[default]
    Database,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Minimal, Profile::Database];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Database => "database",
        }
    }

    /// Dependencies in the order they are installed.
    pub const fn dependencies(&self) -> &'static [Dependency] {
        match self {
            Self::Minimal => MINIMAL_DEPENDENCIES,
            Self::Database => DATABASE_DEPENDENCIES,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "min" => Ok(Self::Minimal),
            "database" | "db" => Ok(Self::Database),
            other => Err(DomainError::UnknownProfile(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_names_are_rejected() {
        assert_eq!(ProjectName::parse(""), Err(DomainError::EmptyProjectName));
        assert_eq!(ProjectName::parse("   "), Err(DomainError::EmptyProjectName));
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for name in ["..", ".", ".hidden", "a/b", "a\\b", "../escape"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn names_that_break_go_sources_or_flags_are_rejected() {
        for name in ["shop\"api", "a`b", "a;b", "-x", "--help", "shop$api", "api.", "caf\u{e9}"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn rejection_names_the_offending_character() {
        let err = ProjectName::parse("a;b").unwrap_err();
        assert!(err.to_string().contains("';'"), "{err}");
    }

    #[test]
    fn whitespace_inside_name_is_rejected() {
        assert!(ProjectName::parse("shop api").is_err());
        assert!(ProjectName::parse("shop\tapi").is_err());
    }

    #[test]
    fn ordinary_names_pass() {
        for name in ["shopapi", "shop-api", "shop_api", "ShopAPI", "v2.api", "api~v1"] {
            assert_eq!(ProjectName::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn base_path_defaults_to_current_directory() {
        let name = ProjectName::parse("shopapi").unwrap();
        let base = BasePath::resolve("", &name);
        assert_eq!(base.as_path(), Path::new("./shopapi"));
    }

    #[test]
    fn base_path_joins_destination() {
        let name = ProjectName::parse("shopapi").unwrap();
        let base = BasePath::resolve("/tmp/work", &name);
        assert_eq!(base.as_path(), Path::new("/tmp/work/shopapi"));
        assert_eq!(base.join("cmd"), PathBuf::from("/tmp/work/shopapi/cmd"));
    }

    #[test]
    fn profile_parses_aliases() {
        assert_eq!("minimal".parse::<Profile>().unwrap(), Profile::Minimal);
        assert_eq!("DB".parse::<Profile>().unwrap(), Profile::Database);
        assert!("nosql".parse::<Profile>().is_err());
    }

    #[test]
    fn database_profile_extends_minimal_dependencies() {
        let minimal = Profile::Minimal.dependencies();
        let database = Profile::Database.dependencies();
        assert_eq!(&database[..minimal.len()], minimal);
        assert!(database.iter().any(|d| d.as_str() == "gorm.io/gorm"));
        assert!(!minimal.iter().any(|d| d.as_str().starts_with("gorm.io")));
    }

    #[test]
    fn default_profile_is_database() {
        assert_eq!(Profile::default(), Profile::Database);
    }
}
