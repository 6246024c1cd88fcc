//! Goforge generates boilerplate Go web application projects.
//! It validates a requested configuration, creates the directory layout for
//! the chosen architecture, and renders embedded templates into Go source
//! files, optionally wiring in database and Docker support.

/// Startup banner output
pub mod banner;

/// Command-line interface module for the goforge application
pub mod cli;

/// Project configuration and validation
/// Normalizes user input and applies defaults before generation
pub mod config;

/// Shared constants such as the default module prefix
/// and the list of supported databases
pub mod constants;

/// Directory layouts and skeleton creation
pub mod directories;

/// Error types and handling for the goforge application
pub mod error;

/// Feature generators for the individual project files
/// Each generator covers one concern: entry point, go.mod, env file,
/// database config, Docker files, Clean Architecture sources
pub mod generators;

/// Core generation orchestration
/// Combines all components to produce the final project tree
pub mod processor;

/// Template rendering functionality
pub mod renderer;

/// Embedded template resources
pub mod templates;

/// File output with parent directory handling
pub mod writer;
