//! Templates compiled into the binary.
//!
//! Bodies live under `templates/go/` in this crate and are embedded with
//! `include_str!`, so the generator has no runtime template lookup. Every
//! body is written against the Go module name `myapp` and declares
//! [`Placeholder::MODULE`].

use gostrap_core::{
    application::ports::TemplateCatalog,
    domain::{Placeholder, TemplateBody, TemplateId},
    error::GostrapResult,
};

/// Catalog serving the builtin Go web-service templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Every body in the catalog, in `TemplateId::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = TemplateBody> {
        TemplateId::ALL.into_iter().map(body_for)
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn get(&self, id: TemplateId) -> GostrapResult<TemplateBody> {
        Ok(body_for(id))
    }
}

fn body_for(id: TemplateId) -> TemplateBody {
    let text = match id {
        TemplateId::EntrypointMinimal => include_str!("../../templates/go/main_minimal.go.tmpl"),
        TemplateId::EntrypointDatabase => {
            include_str!("../../templates/go/main_database.go.tmpl")
        }
        TemplateId::ConfigMinimal => include_str!("../../templates/go/config_minimal.go.tmpl"),
        TemplateId::ConfigDatabase => include_str!("../../templates/go/config_database.go.tmpl"),
        TemplateId::UserModelMinimal => {
            include_str!("../../templates/go/user_model_minimal.go.tmpl")
        }
        TemplateId::UserModelDatabase => {
            include_str!("../../templates/go/user_model_database.go.tmpl")
        }
        TemplateId::Routes => include_str!("../../templates/go/routes.go.tmpl"),
        TemplateId::HomeController => include_str!("../../templates/go/home_controller.go.tmpl"),
        TemplateId::UserService => include_str!("../../templates/go/user_service.go.tmpl"),
        TemplateId::HashUtil => include_str!("../../templates/go/hash.go.tmpl"),
        TemplateId::EnvMinimal => include_str!("../../templates/go/env_minimal.tmpl"),
        TemplateId::EnvDatabase => include_str!("../../templates/go/env_database.tmpl"),
    };
    TemplateBody::new(id, text, Placeholder::MODULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gostrap_core::domain::{BasePath, LayoutPlanner, NameSubstitutor, Profile, ProjectName};

    const ENV_KEYS: &[&str] = &[
        "PORT",
        "APP_NAME",
        "ENV",
        "DB_DRIVER",
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
        "JWT_SECRET",
        "JWT_EXPIRE",
        "LOG_LEVEL",
    ];

    fn name(s: &str) -> ProjectName {
        ProjectName::parse(s).unwrap()
    }

    #[test]
    fn catalog_covers_every_planned_template() {
        let catalog = BuiltinCatalog::new();
        for profile in Profile::ALL {
            let plan = LayoutPlanner::plan(&BasePath::resolve("", &name("x")), profile);
            for file in &plan.files {
                let body = catalog.get(file.template).unwrap();
                assert_eq!(body.id, file.template);
                assert!(!body.text.is_empty());
            }
        }
    }

    #[test]
    fn rendering_removes_every_placeholder() {
        let catalog = BuiltinCatalog::new();
        for project in ["shopapi", "inventory_svc", "billing-v2"] {
            let project = name(project);
            let substitutor = NameSubstitutor::new(&project);
            for body in catalog.entries() {
                let rendered = substitutor.render(&body);
                assert!(
                    !rendered.contains("myapp") && !rendered.contains("myApp"),
                    "{} still has a placeholder",
                    body.id
                );
                assert_eq!(
                    rendered.matches(project.as_str()).count(),
                    body.text.matches(project.as_str()).count() + body.placeholder_count(),
                    "{} substituted the wrong number of times",
                    body.id
                );
            }
        }
    }

    #[test]
    fn bodies_without_placeholder_render_unchanged() {
        let catalog = BuiltinCatalog::new();
        let gin = name("gin");
        let substitutor = NameSubstitutor::new(&gin);
        for body in catalog.entries().filter(|b| b.placeholder_count() == 0) {
            assert_eq!(substitutor.render(&body), body.text, "{} changed", body.id);
        }
        let hash = catalog.get(TemplateId::HashUtil).unwrap();
        assert_eq!(hash.placeholder_count(), 0);
    }

    #[test]
    fn routes_keep_third_party_imports_intact() {
        let gin = name("gin");
        let routes = catalog_render(TemplateId::Routes, &gin);
        assert!(routes.contains("\"github.com/gin-gonic/gin\""));
        assert!(routes.contains("\"gin/app/controllers\""));
    }

    #[test]
    fn entrypoint_imports_project_packages() {
        let shop = name("shopapi");
        for id in [TemplateId::EntrypointMinimal, TemplateId::EntrypointDatabase] {
            let main = catalog_render(id, &shop);
            assert!(main.starts_with("package main"));
            assert!(main.contains("\"shopapi/app/config\""));
            assert!(main.contains("\"shopapi/app/routes\""));
        }
    }

    #[test]
    fn database_entrypoint_passes_explicit_connection() {
        let main = catalog_render(TemplateId::EntrypointDatabase, &name("shopapi"));
        assert!(main.contains("db, err := config.Connect(cfg.Database)"));
        assert!(main.contains("db.Conn.AutoMigrate"));

        let config = catalog_render(TemplateId::ConfigDatabase, &name("shopapi"));
        assert!(!config.contains("var DB"));
        assert!(config.contains("func Connect(cfg DatabaseConfig) (*Database, error)"));
    }

    #[test]
    fn database_config_and_env_cover_all_keys() {
        let config = catalog_render(TemplateId::ConfigDatabase, &name("shopapi"));
        let env = catalog_render(TemplateId::EnvDatabase, &name("shopapi"));
        for key in ENV_KEYS {
            assert!(config.contains(&format!("\"{key}\"")), "config misses {key}");
            assert!(env.contains(&format!("{key}=")), "env misses {key}");
        }
        assert!(env.contains("APP_NAME=shopapi"));
        assert!(env.contains("DB_NAME=shopapi"));
    }

    #[test]
    fn minimal_profile_has_no_database_layer() {
        let shop = name("shopapi");
        for id in [
            TemplateId::EntrypointMinimal,
            TemplateId::ConfigMinimal,
            TemplateId::UserModelMinimal,
            TemplateId::EnvMinimal,
        ] {
            let text = catalog_render(id, &shop);
            assert!(!text.contains("gorm"), "{id} mentions gorm");
            assert!(!text.contains("DB_"), "{id} mentions DB_ keys");
        }
    }

    fn catalog_render(id: TemplateId, project: &ProjectName) -> String {
        let body = BuiltinCatalog::new().get(id).unwrap();
        NameSubstitutor::new(project).render(&body)
    }
}
