//! # Application Configuration
//!
//! Where the document is stored and what the exports are called.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Loading                                │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BILLING_DB_PATH=/tmp/billing.db                                    │
//! │     BILLING_STORAGE_KEY=shop-2                                         │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  2. Config File (--config, or <config dir>/billing.toml)               │
//! │     [storage]                                                          │
//! │     key = "billing-app-state"                                          │
//! │     [export]                                                           │
//! │     csv_file_name = "invoice.csv"                                      │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  3. Default Values (lowest priority)                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use billing_core::DEFAULT_STORAGE_KEY;

/// Environment variable overriding the database file.
pub const ENV_DB_PATH: &str = "BILLING_DB_PATH";

/// Environment variable overriding the storage key.
pub const ENV_STORAGE_KEY: &str = "BILLING_STORAGE_KEY";

const CONFIG_FILE_NAME: &str = "billing.toml";
const DATABASE_FILE_NAME: &str = "billing.db";

// =============================================================================
// Errors
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the application data directory")]
    NoDataDir,
}

// =============================================================================
// Settings
// =============================================================================

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Key the document is stored under.
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            database_path: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Export file names used when no `--output` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub csv_file_name: String,
    pub json_file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            csv_file_name: "invoice.csv".to_string(),
            json_file_name: "invoice.json".to_string(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub export: ExportSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (missing file is fine, malformed file is an error)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses one TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Rejects settings no command can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage key must not be empty".into()));
        }

        if self.export.csv_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("csv_file_name must not be empty".into()));
        }

        if self.export.json_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("json_file_name must not be empty".into()));
        }

        Ok(())
    }

    /// Resolves the database file, creating its directory when it is the
    /// platform default.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.billing.billing/billing.db`
    /// - **Windows**: `%APPDATA%\billing\billing\data\billing.db`
    /// - **Linux**: `~/.local/share/billing/billing.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DB_PATH) {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup(ENV_STORAGE_KEY) {
            debug!(key = %key, "Overriding storage key from environment");
            self.storage.key = key;
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "billing", "billing")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.key, "billing-app-state");
        assert_eq!(config.storage.database_path, None);
        assert_eq!(config.export.csv_file_name, "invoice.csv");
        assert_eq!(config.export.json_file_name, "invoice.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            key = "shop-2"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.key, "shop-2");
        assert_eq!(config.export, ExportSettings::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/tmp/other.db"),
            (ENV_STORAGE_KEY, "counter-3"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.key, "counter-3");
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/other.db")
        );
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.storage.key = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.export.csv_file_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file() {
        let path = std::env::temp_dir().join(format!("billing-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[storage\nkey = ").unwrap();

        let result = AppConfig::from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[export]"));
    }
}
