//! Project generation pipeline.

use std::path::Path;

use log::debug;

use crate::config::ProjectConfig;
use crate::directories::create_directory_structure;
use crate::error::Result;
use crate::generators::{
    generate_clean_arch_files, generate_database_config, generate_docker_files,
    generate_env_example, generate_go_mod, generate_main_file,
};
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateStore;

/// Generates a complete project tree under `project_root` from a validated
/// configuration. Steps run in a fixed order and the first failure aborts
/// the run; files already written stay on disk.
pub fn process_project(
    config: &ProjectConfig,
    project_root: &Path,
    store: &TemplateStore,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    debug!("Generating project: {:?}", config);

    create_directory_structure(config, project_root)?;
    generate_main_file(config, project_root, store, engine)?;
    generate_go_mod(config, project_root)?;
    generate_env_example(project_root)?;
    generate_database_config(config, project_root, store, engine)?;
    generate_docker_files(config, project_root, store, engine)?;
    generate_clean_arch_files(config, project_root, store, engine)?;

    Ok(())
}
