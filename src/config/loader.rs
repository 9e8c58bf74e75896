use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/kyc-intake/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("kyc-intake").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Deposit bounds are finite, non-negative and ordered
    /// - The document size limit is positive
    /// - At least one document type is accepted
    pub fn validate(&self) -> Result<(), ConfigError> {
        let deposit = &self.deposit;
        if !deposit.min.is_finite() || !deposit.max.is_finite() {
            return Err(ConfigError::ValidationError {
                message: "Deposit limits must be finite numbers".to_string(),
            });
        }

        if deposit.min < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("Deposit minimum {} must not be negative", deposit.min),
            });
        }

        if deposit.min > deposit.max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Deposit minimum {} exceeds maximum {}",
                    deposit.min, deposit.max
                ),
            });
        }

        if self.document.max_bytes == 0 {
            return Err(ConfigError::ValidationError {
                message: "Document size limit must be greater than zero".to_string(),
            });
        }

        if self.document.accepted_types.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one document type must be accepted".to_string(),
            });
        }

        Ok(())
    }
}
