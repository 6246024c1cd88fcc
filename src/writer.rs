//! File output for generated projects.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// Writes `content` to `file_path` below `project_root`, creating any
/// missing parent directories. An existing file at the same path is
/// overwritten.
pub fn write_file(project_root: &Path, file_path: &str, content: &str) -> Result<()> {
    let full_path = project_root.join(file_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDirectoryError {
            path: parent.display().to_string(),
            source,
        })?;
    }

    debug!("Writing file: {}", full_path.display());
    fs::write(&full_path, content).map_err(|source| Error::WriteFileError {
        path: full_path.display().to_string(),
        source,
    })
}

/// Renders `template` against `context` and writes the result to
/// `file_path` below `project_root`. Nothing is written when rendering
/// fails.
pub fn write_rendered(
    project_root: &Path,
    file_path: &str,
    template: &str,
    context: &Value,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    let content = engine.render(template, context)?;
    write_file(project_root, file_path, &content)
}
