//! Embedded template resources for goforge.
//! Every template ships inside the binary via `include_str!` and is
//! addressed by its path under `templates/`. The store is built once at
//! startup; the renderer itself never knows where template text came from.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Path-addressed table of the embedded template resources.
pub struct TemplateStore {
    entries: IndexMap<&'static str, &'static str>,
}

impl TemplateStore {
    /// Builds the store from the templates compiled into the binary.
    pub fn embedded() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("base/main.go.tmpl", include_str!("../templates/base/main.go.tmpl"));
        entries.insert(
            "base/main-cleanarch.go.tmpl",
            include_str!("../templates/base/main-cleanarch.go.tmpl"),
        );
        entries.insert(
            "database/mysql.go.tmpl",
            include_str!("../templates/database/mysql.go.tmpl"),
        );
        entries.insert(
            "database/postgres.go.tmpl",
            include_str!("../templates/database/postgres.go.tmpl"),
        );
        entries.insert(
            "database/sqlite.go.tmpl",
            include_str!("../templates/database/sqlite.go.tmpl"),
        );
        entries.insert(
            "docker/Dockerfile.tmpl",
            include_str!("../templates/docker/Dockerfile.tmpl"),
        );
        entries.insert(
            "docker/docker-compose.yml.tmpl",
            include_str!("../templates/docker/docker-compose.yml.tmpl"),
        );
        entries.insert(
            "cleanarch/domain.go.tmpl",
            include_str!("../templates/cleanarch/domain.go.tmpl"),
        );
        entries.insert(
            "cleanarch/repository.go.tmpl",
            include_str!("../templates/cleanarch/repository.go.tmpl"),
        );
        entries.insert(
            "cleanarch/service.go.tmpl",
            include_str!("../templates/cleanarch/service.go.tmpl"),
        );
        entries.insert(
            "cleanarch/handler.go.tmpl",
            include_str!("../templates/cleanarch/handler.go.tmpl"),
        );
        Self { entries }
    }

    /// Returns the template text registered under `name`.
    ///
    /// # Errors
    /// * `Error::TemplateError` if no template carries that name
    pub fn get(&self, name: &str) -> Result<&'static str> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| Error::TemplateError(format!("unknown template '{}'", name)))
    }

    /// Iterates the registered template names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
