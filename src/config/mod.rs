//! Configuration module for jtag
//!
//! User defaults for encoding (session, workspace) and the schema location.
//! Configuration is read from `config.toml` in the user's config directory and
//! from `JTAG_*` environment variables; command-line flags win over both.
//! Nothing is written back: a missing file just means defaults.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codec::{DEFAULT_SESSION, DEFAULT_WORKSPACE};

const ENV_PREFIX: &str = "JTAG";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JtagConfig {
    /// Session used when `--session` is not given
    #[serde(default = "default_session")]
    pub default_session: u32,

    /// Workspace flags (hex or names) used when `--workspace` is not given
    #[serde(default = "default_workspace")]
    pub default_workspace: String,

    /// Schema file location, overriding `./journal_schema.toml`
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Colorize output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_session() -> u32 {
    u32::from(DEFAULT_SESSION)
}

fn default_workspace() -> String {
    format!("{DEFAULT_WORKSPACE:02X}")
}

const fn default_color() -> bool {
    true
}

impl Default for JtagConfig {
    fn default() -> Self {
        Self {
            default_session: default_session(),
            default_workspace: default_workspace(),
            schema_path: None,
            quiet: false,
            color: default_color(),
        }
    }
}

impl JtagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("jtag").join("config.toml"))
    }

    /// Load configuration from the default location and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown or the file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path, true)
    }

    /// Load configuration from a specific file, optionally layering `JTAG_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed or holds
    /// values of the wrong type.
    pub fn load_from(path: &Path, with_env: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false));

        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JtagConfig::default();
        assert_eq!(config.default_session, 1);
        assert_eq!(config.default_workspace, "01");
        assert!(config.schema_path.is_none());
        assert!(!config.quiet);
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = JtagConfig::load_from(&temp_dir.path().join("config.toml"), false).unwrap();
        assert_eq!(config, JtagConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_session = 3\nschema_path = \"/srv/journal/schema.toml\"\n").unwrap();

        let config = JtagConfig::load_from(&path, false).unwrap();
        assert_eq!(config.default_session, 3);
        assert_eq!(config.schema_path, Some(PathBuf::from("/srv/journal/schema.toml")));
        assert_eq!(config.default_workspace, "01");
        assert!(config.color);
    }

    #[test]
    fn test_load_rejects_wrong_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "quiet = \"sometimes\"\n").unwrap();

        assert!(JtagConfig::load_from(&path, false).is_err());
    }

    #[test]
    fn test_config_path_ends_with_jtag() {
        if let Ok(path) = JtagConfig::config_path() {
            assert!(path.ends_with("jtag/config.toml"));
        }
    }
}
