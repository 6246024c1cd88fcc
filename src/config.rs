//! Configuration handling for goforge projects.
//! This module holds the generation options collected from the command line
//! and the validation that normalizes them before any generator runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{DEFAULT_MODULE_PREFIX, VALID_DATABASES};
use crate::error::{Error, Result};

/// Names must be usable as a directory name on every platform.
static PROJECT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project name pattern is valid"));

/// Options for a single project generation run.
///
/// Constructed once from the parsed command line, validated once, then
/// treated as read-only by every generator downstream.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    /// Project name, also used as the output directory name
    pub project_name: String,
    /// Go module path of the generated project
    pub module_path: String,
    /// Requested database kind; empty means no database wiring
    pub database: String,
    /// Whether to emit Dockerfile and docker-compose.yml
    pub docker: bool,
    /// Whether to generate the Clean Architecture layout
    pub clean_arch: bool,
}

impl ProjectConfig {
    /// Checks the configuration and fills in defaults.
    ///
    /// Rules are applied in order and the first failure wins:
    /// 1. `project_name` must be non-empty.
    /// 2. `project_name` must match `[A-Za-z0-9_-]+`.
    /// 3. A non-empty `database` must be one of [`VALID_DATABASES`]
    ///    (case-insensitively); it is stored lowercased.
    /// 4. An empty `module_path` defaults to
    ///    `github.com/user/<project_name>`.
    ///
    /// Never touches the filesystem.
    ///
    /// # Errors
    /// * `Error::ConfigError` describing the first rule that failed
    pub fn validate(&mut self) -> Result<()> {
        if self.project_name.is_empty() {
            return Err(Error::ConfigError("project name cannot be empty".to_string()));
        }

        if !PROJECT_NAME_PATTERN.is_match(&self.project_name) {
            return Err(Error::ConfigError(
                "project name can only contain letters, numbers, hyphens, and underscores"
                    .to_string(),
            ));
        }

        if !self.database.is_empty() {
            let normalized = self.database.to_lowercase();
            if !VALID_DATABASES.contains(&normalized.as_str()) {
                return Err(Error::ConfigError(format!(
                    "invalid database type: {} (valid options: {})",
                    self.database,
                    VALID_DATABASES.join(", ")
                )));
            }
            self.database = normalized;
        }

        if self.module_path.is_empty() {
            self.module_path = format!("{}/{}", DEFAULT_MODULE_PREFIX, self.project_name);
        }

        Ok(())
    }
}
