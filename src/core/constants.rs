//! Constants used throughout sesame.
//!
//! Centralizes magic strings and limits.

/// Default configuration file name (sesame.toml).
pub const CONFIG_FILE: &str = "sesame.toml";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SESAME_LOG";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "SESAME_CONFIG";

/// Separator between segments of a parameter path.
pub const PATH_SEPARATOR: char = '/';

/// Maximum number of names accepted by a single `GetParameters` call.
///
/// Imposed by the SSM API; raising it requires a different remote call.
pub const SECRET_BATCH_SIZE: usize = 10;

/// File extensions parsed as YAML rather than TOML.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
