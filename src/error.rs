//! Error handling for the goforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for goforge operations.
///
/// This enum represents all possible errors that can occur within the goforge
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Directory creation failures, carrying the offending path
    #[error("Failed to create directory '{path}': {source}.")]
    CreateDirectoryError { path: String, source: io::Error },

    /// File write failures, carrying the offending path
    #[error("Failed to write file '{path}': {source}.")]
    WriteFileError { path: String, source: io::Error },

    /// Returned when the project root already exists on disk
    #[error("Directory '{project_dir}' already exists.")]
    ProjectDirectoryExistsError { project_dir: String },

    /// Represents validation failures in the project configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in resolving or selecting template resources
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents template parse and render failures
    #[error("Template render error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents failures serializing a generator context
    #[error("Template context error: {0}.")]
    ContextError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with goforge's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
