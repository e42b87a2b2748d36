//! Template identities and bodies.
//!
//! A [`TemplateBody`] is opaque boilerplate plus the [`Placeholder`] it
//! declares. The catalog that owns the actual text lives behind the
//! `TemplateCatalog` port; the domain only knows the identifiers.

use std::fmt;

use serde::Serialize;

use crate::domain::substitution::Placeholder;

/// Identifier of one catalog entry.
///
/// Profile-specific variants exist for the files whose content depends on
/// whether the database layer is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    EntrypointMinimal,
    EntrypointDatabase,
    ConfigMinimal,
    ConfigDatabase,
    UserModelMinimal,
    UserModelDatabase,
    Routes,
    HomeController,
    UserService,
    HashUtil,
    EnvMinimal,
    EnvDatabase,
}

impl TemplateId {
    pub const ALL: [TemplateId; 12] = [
        Self::EntrypointMinimal,
        Self::EntrypointDatabase,
        Self::ConfigMinimal,
        Self::ConfigDatabase,
        Self::UserModelMinimal,
        Self::UserModelDatabase,
        Self::Routes,
        Self::HomeController,
        Self::UserService,
        Self::HashUtil,
        Self::EnvMinimal,
        Self::EnvDatabase,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EntrypointMinimal => "entrypoint-minimal",
            Self::EntrypointDatabase => "entrypoint-database",
            Self::ConfigMinimal => "config-minimal",
            Self::ConfigDatabase => "config-database",
            Self::UserModelMinimal => "user-model-minimal",
            Self::UserModelDatabase => "user-model-database",
            Self::Routes => "routes",
            Self::HomeController => "home-controller",
            Self::UserService => "user-service",
            Self::HashUtil => "hash-util",
            Self::EnvMinimal => "env-minimal",
            Self::EnvDatabase => "env-database",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boilerplate text of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBody {
    pub id: TemplateId,
    pub text: &'static str,
    pub placeholder: Placeholder,
}

impl TemplateBody {
    pub const fn new(id: TemplateId, text: &'static str, placeholder: Placeholder) -> Self {
        Self {
            id,
            text,
            placeholder,
        }
    }

    /// Number of placeholder occurrences rendering will replace.
    pub fn placeholder_count(&self) -> usize {
        self.placeholder.count_in(self.text)
    }
}
