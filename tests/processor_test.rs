use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use goforge::config::ProjectConfig;
use goforge::error::Result;
use goforge::processor::process_project;
use goforge::renderer::MiniJinjaRenderer;
use goforge::templates::TemplateStore;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Runs the same validate-then-generate sequence the CLI runs.
fn try_generate(config: &mut ProjectConfig, root: &Path) -> Result<()> {
    config.validate()?;
    let store = TemplateStore::embedded();
    let engine = MiniJinjaRenderer::new();
    process_project(config, root, &store, &engine)
}

fn generate(config: &mut ProjectConfig, root: &Path) {
    try_generate(config, root).unwrap();
}

fn collect_files(root: &Path) -> BTreeSet<String> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry.path().strip_prefix(root).unwrap();
            files.insert(rel.to_str().unwrap().to_string());
        }
    }
    files
}

#[test_log::test]
fn test_default_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("blog");
    let mut config = ProjectConfig {
        project_name: "blog".to_string(),
        ..Default::default()
    };

    generate(&mut config, &root);

    let expected: BTreeSet<String> =
        [".env.example", "go.mod", "main.go"].iter().map(|s| s.to_string()).collect();
    assert_eq!(collect_files(&root), expected);

    assert!(root.join("handler").is_dir());
    assert!(root.join("domain").is_dir());
    assert!(!root.join("Dockerfile").exists());
    assert!(!root.join("docker-compose.yml").exists());

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/user/blog\n"));
}

#[test]
fn test_database_and_docker_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("shop");
    let mut config = ProjectConfig {
        project_name: "shop".to_string(),
        database: "Postgres".to_string(),
        docker: true,
        ..Default::default()
    };

    generate(&mut config, &root);

    let db = fs::read_to_string(root.join("handler/db.go")).unwrap();
    assert!(db.starts_with("package handler"));

    let compose = fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("postgres"));
    assert!(root.join("Dockerfile").is_file());
}

#[test_log::test]
fn test_full_clean_arch_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("api");
    let mut config = ProjectConfig {
        project_name: "api".to_string(),
        module_path: "example.com/team/api".to_string(),
        database: "mysql".to_string(),
        docker: true,
        clean_arch: true,
    };

    generate(&mut config, &root);

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.contains("module example.com/team/api"));

    let db_config = fs::read_to_string(root.join("internal/config/database.go")).unwrap();
    assert!(db_config.starts_with("package config"));

    for file in [
        "cmd/app/main.go",
        "internal/domain/user.go",
        "internal/repository/user_repository.go",
        "internal/service/user_service.go",
        "internal/handler/user_handler.go",
    ] {
        assert!(root.join(file).is_file(), "missing {}", file);
    }

    let main_file = fs::read_to_string(root.join("cmd/app/main.go")).unwrap();
    assert!(main_file.contains("example.com/team/api/internal/handler"));
}

#[test]
fn test_generated_files_end_with_newline() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    let mut config = ProjectConfig {
        project_name: "demo".to_string(),
        database: "mysql".to_string(),
        docker: true,
        clean_arch: true,
        ..Default::default()
    };

    generate(&mut config, &root);

    for file in collect_files(&root) {
        let content = fs::read_to_string(root.join(&file)).unwrap();
        assert!(content.ends_with('\n'), "{} has no trailing newline", file);
    }
}

#[test]
fn test_invalid_config_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    let mut config = ProjectConfig {
        project_name: "demo".to_string(),
        database: "oracle".to_string(),
        ..Default::default()
    };

    let err = try_generate(&mut config, &root).unwrap_err();

    assert!(err.to_string().contains("invalid database type: oracle"));
    assert!(!root.exists());
}

#[test]
fn test_existing_directory_aborts_before_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("taken");
    fs::create_dir(&root).unwrap();

    let mut config = ProjectConfig {
        project_name: "taken".to_string(),
        ..Default::default()
    };
    config.validate().unwrap();

    let store = TemplateStore::embedded();
    let engine = MiniJinjaRenderer::new();
    assert!(process_project(&config, &root, &store, &engine).is_err());
    assert!(!root.join("go.mod").exists());
    assert!(!root.join("main.go").exists());
}
