//! Goforge's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates validation,
//! template rendering, and project generation.

use std::path::PathBuf;

use clap::CommandFactory;
use goforge::{
    banner,
    cli::{get_args, Cli, Command, NewArgs},
    config::ProjectConfig,
    constants::VERSION,
    error::{default_error_handler, Error, Result},
    processor::process_project,
    renderer::MiniJinjaRenderer,
    templates::TemplateStore,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of project generation
fn run(args: Cli) -> Result<()> {
    match args.command {
        Some(Command::New(new_args)) => run_new(new_args),
        Some(Command::Version) => {
            println!("goforge v{}", VERSION);
            Ok(())
        }
        None => {
            banner::print();
            Cli::command().print_help().map_err(Error::IoError)?;
            Ok(())
        }
    }
}

/// Validates the requested configuration and generates the project tree.
///
/// # Flow
/// 1. Builds the project configuration from CLI flags
/// 2. Validates and normalizes it
/// 3. Generates directories and files under `<project-name>/`
/// 4. Prints next steps on success
fn run_new(args: NewArgs) -> Result<()> {
    banner::print();

    let mut config = ProjectConfig {
        project_name: args.project_name,
        module_path: args.module.unwrap_or_default(),
        database: args.db.unwrap_or_default(),
        docker: args.docker,
        clean_arch: args.clean_arch,
    };
    config.validate()?;

    let project_root = PathBuf::from(&config.project_name);
    let store = TemplateStore::embedded();
    let engine = MiniJinjaRenderer::new();
    process_project(&config, &project_root, &store, &engine)?;

    println!();
    println!("Project '{}' created successfully!", config.project_name);
    println!();
    println!("Next steps:");
    println!("  cd {}", config.project_name);
    println!("  go mod tidy");
    if config.clean_arch {
        println!("  go run ./cmd/app");
    } else {
        println!("  go run .");
    }
    Ok(())
}
