//! Command-line interface implementation for goforge.
//! Provides argument parsing and help text formatting using clap.

use clap::{Args, Parser, Subcommand};

/// Command-line arguments structure for goforge.
#[derive(Parser, Debug)]
#[command(
    name = "goforge",
    version,
    about = "Goforge: boilerplate generator for Go web projects",
    long_about = "goforge is a CLI tool for generating boilerplate Go web application projects.\n\
                  It supports multiple architectures, databases, and includes Docker support."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands supported by goforge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new Go project
    #[command(after_help = "Examples:\n  \
                            goforge new myapp\n  \
                            goforge new myapp --db mysql --docker\n  \
                            goforge new myapp --clean-arch --db postgres --module github.com/user/myapp")]
    New(NewArgs),

    /// Print the version number of goforge
    Version,
}

/// Options for the `new` subcommand.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the project to generate
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Database type (mysql, postgres, sqlite)
    #[arg(long, value_name = "TYPE")]
    pub db: Option<String>,

    /// Go module path (default: github.com/user/<project-name>)
    #[arg(long, value_name = "PATH")]
    pub module: Option<String>,

    /// Include Dockerfile and docker-compose
    #[arg(long)]
    pub docker: bool,

    /// Generate Clean Architecture structure
    #[arg(long)]
    pub clean_arch: bool,
}

/// Parses command line arguments and returns the Cli structure.
pub fn get_args() -> Cli {
    Cli::parse()
}
