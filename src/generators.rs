//! Feature generators. Each one emits a slice of the project tree and
//! prints a progress line once its files are on disk. Generators guarded
//! by a flag return `Ok(())` without touching the filesystem when the
//! flag is off.

use std::path::Path;

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateStore;
use crate::writer::{write_file, write_rendered};

const GO_VERSION: &str = "1.21";

const ENV_EXAMPLE: &str = "APP_PORT=8080\n\
DB_HOST=localhost\n\
DB_PORT=3306\n\
DB_USER=root\n\
DB_PASS=\n\
DB_NAME=app\n";

/// Rendered Clean Architecture sources, keyed output path to template name.
/// The domain entity is written verbatim and is not listed here.
const CLEAN_ARCH_FILES: [(&str, &str); 3] = [
    ("internal/repository/user_repository.go", "cleanarch/repository.go.tmpl"),
    ("internal/service/user_service.go", "cleanarch/service.go.tmpl"),
    ("internal/handler/user_handler.go", "cleanarch/handler.go.tmpl"),
];

#[derive(Serialize)]
struct MainContext<'a> {
    project_name: &'a str,
    module_path: &'a str,
}

#[derive(Serialize)]
struct DatabaseContext<'a> {
    package_name: &'a str,
}

#[derive(Serialize)]
struct DockerfileContext {
    clean_arch: bool,
}

#[derive(Serialize)]
struct ComposeContext<'a> {
    project_name: &'a str,
    database: &'a str,
    clean_arch: bool,
}

#[derive(Serialize)]
struct CleanArchContext<'a> {
    module_path: &'a str,
}

/// Generates the application entry point. Clean Architecture projects get
/// `cmd/app/main.go`, flat projects get `main.go` at the root.
pub fn generate_main_file(
    config: &ProjectConfig,
    project_root: &Path,
    store: &TemplateStore,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    let (file_path, template_name) = if config.clean_arch {
        ("cmd/app/main.go", "base/main-cleanarch.go.tmpl")
    } else {
        ("main.go", "base/main.go.tmpl")
    };

    let context = serde_json::to_value(MainContext {
        project_name: &config.project_name,
        module_path: &config.module_path,
    })?;
    write_rendered(project_root, file_path, store.get(template_name)?, &context, engine)?;

    println!("Created {}", file_path);
    Ok(())
}

/// Generates `go.mod` declaring the configured module path.
pub fn generate_go_mod(config: &ProjectConfig, project_root: &Path) -> Result<()> {
    let content = format!("module {}\n\ngo {}\n\n", config.module_path, GO_VERSION);
    write_file(project_root, "go.mod", &content)?;

    println!("Created go.mod");
    Ok(())
}

/// Generates the `.env.example` file. Its content is fixed and does not
/// depend on the selected options.
pub fn generate_env_example(project_root: &Path) -> Result<()> {
    write_file(project_root, ".env.example", ENV_EXAMPLE)?;

    println!("Created .env.example");
    Ok(())
}

/// Generates the database connection file for the selected driver. With no
/// database selected this is a no-op. The file lands in
/// `internal/config/database.go` for Clean Architecture projects and in
/// `handler/db.go` otherwise, with its Go package named after the
/// containing directory.
pub fn generate_database_config(
    config: &ProjectConfig,
    project_root: &Path,
    store: &TemplateStore,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    if config.database.is_empty() {
        return Ok(());
    }

    let (file_path, package_name) = if config.clean_arch {
        ("internal/config/database.go", "config")
    } else {
        ("handler/db.go", "handler")
    };

    // validate() has already normalized the database name, so an unknown
    // value here means the call order was broken upstream.
    let template_name = match config.database.as_str() {
        "mysql" => "database/mysql.go.tmpl",
        "postgres" => "database/postgres.go.tmpl",
        "sqlite" => "database/sqlite.go.tmpl",
        other => {
            return Err(Error::TemplateError(format!("unsupported database: {}", other)));
        }
    };

    let context = serde_json::to_value(DatabaseContext { package_name })?;
    write_rendered(project_root, file_path, store.get(template_name)?, &context, engine)?;

    println!("Created database config ({})", config.database);
    Ok(())
}

/// Generates `Dockerfile` and `docker-compose.yml` when Docker support is
/// requested. The compose file gains a database service for server
/// databases; sqlite lives inside the app container and gets none.
pub fn generate_docker_files(
    config: &ProjectConfig,
    project_root: &Path,
    store: &TemplateStore,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    if !config.docker {
        return Ok(());
    }

    let context = serde_json::to_value(DockerfileContext { clean_arch: config.clean_arch })?;
    write_rendered(
        project_root,
        "Dockerfile",
        store.get("docker/Dockerfile.tmpl")?,
        &context,
        engine,
    )?;

    let context = serde_json::to_value(ComposeContext {
        project_name: &config.project_name,
        database: &config.database,
        clean_arch: config.clean_arch,
    })?;
    write_rendered(
        project_root,
        "docker-compose.yml",
        store.get("docker/docker-compose.yml.tmpl")?,
        &context,
        engine,
    )?;

    println!("Created Docker files");
    Ok(())
}

/// Generates the sample Clean Architecture sources: a domain entity plus a
/// repository, service, and handler wired to it. The domain file contains
/// no placeholders and is written verbatim.
pub fn generate_clean_arch_files(
    config: &ProjectConfig,
    project_root: &Path,
    store: &TemplateStore,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    if !config.clean_arch {
        return Ok(());
    }

    write_file(
        project_root,
        "internal/domain/user.go",
        store.get("cleanarch/domain.go.tmpl")?,
    )?;

    let context = serde_json::to_value(CleanArchContext { module_path: &config.module_path })?;
    for (file_path, template_name) in CLEAN_ARCH_FILES {
        write_rendered(project_root, file_path, store.get(template_name)?, &context, engine)?;
    }

    println!("Created Clean Architecture files");
    Ok(())
}
