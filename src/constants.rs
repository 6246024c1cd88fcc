//! Common constants used throughout the goforge application.

/// Application version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Module path prefix applied when --module is not given
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/user";

/// Database kinds accepted by --db
pub const VALID_DATABASES: [&str; 3] = ["mysql", "postgres", "sqlite"];
