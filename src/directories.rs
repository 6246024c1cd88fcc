//! Directory skeletons for the supported project layouts.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// Directories created for a Clean Architecture project.
pub const LAYERED_DIRS: &[&str] = &[
    "cmd/app",
    "internal/config",
    "internal/handler",
    "internal/service",
    "internal/repository",
    "internal/domain",
    "pkg",
];

/// Directories created for a flat project.
pub const SIMPLE_DIRS: &[&str] = &["handler", "domain"];

/// Selects the directory list for the requested layout.
pub fn layout_dirs(clean_arch: bool) -> &'static [&'static str] {
    if clean_arch {
        LAYERED_DIRS
    } else {
        SIMPLE_DIRS
    }
}

/// Creates the project root and its layout skeleton.
///
/// # Errors
/// * `Error::ProjectDirectoryExistsError` if `project_root` already exists,
///   whether as a directory or a file
/// * `Error::CreateDirectoryError` if any directory cannot be created
pub fn create_directory_structure(config: &ProjectConfig, project_root: &Path) -> Result<()> {
    if project_root.exists() {
        return Err(Error::ProjectDirectoryExistsError {
            project_dir: project_root.display().to_string(),
        });
    }

    create_dir(project_root)?;
    for dir in layout_dirs(config.clean_arch) {
        create_dir(&project_root.join(dir))?;
    }

    println!("Created directory structure for '{}'", config.project_name);
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|source| Error::CreateDirectoryError {
        path: path.display().to_string(),
        source,
    })
}
