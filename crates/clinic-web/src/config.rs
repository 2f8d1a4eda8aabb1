//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file
//! (`clinic.toml` if present, or an explicit path), then `CLINIC_*`
//! environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Config file read when no explicit path is given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "clinic.toml";

/// Prefix for environment overrides, e.g. `CLINIC_BIND_ADDR`.
pub const ENV_PREFIX: &str = "CLINIC";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Maximum pooled connections
    pub pool_size: u32,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            database_path: PathBuf::from("clinic.db"),
            pool_size: 8,
        }
    }
}

/// Load configuration. An explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<WebConfig, ConfigError> {
    let defaults = WebConfig::default();
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    Config::builder()
        .set_default("bind_addr", defaults.bind_addr)?
        .set_default(
            "database_path",
            defaults.database_path.to_string_lossy().into_owned(),
        )?
        .set_default("pool_size", i64::from(defaults.pool_size))?
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "pool_size = 2").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.pool_size, 2);
        assert_eq!(config.database_path, PathBuf::from("clinic.db"));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }
}
