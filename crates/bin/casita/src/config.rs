//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `casita.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use casita_domain::device::DeviceKind;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Initial roster, in menu order.
    pub devices: Vec<DeviceConfig>,
}

/// Persistence file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the devices file.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One initial device.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub name: String,
    pub kind: DeviceKind,
}

impl Config {
    /// Load configuration from `casita.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("casita.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CASITA_STORAGE_PATH") {
            self.storage.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("CASITA_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.devices.iter().any(|d| d.name.is_empty()) {
            return Err(ConfigError::Validation(
                "device names must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            devices: default_devices(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("devices.txt"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "casita=info".to_string(),
        }
    }
}

fn default_devices() -> Vec<DeviceConfig> {
    [
        ("Bedroom Light", DeviceKind::Light),
        ("Ceiling Fan", DeviceKind::Fan),
        ("Living Room AC", DeviceKind::AirConditioner),
        ("Bathroom Heater", DeviceKind::Heater),
        ("Coffee Maker Plug", DeviceKind::SmartPlug),
        ("Smart TV", DeviceKind::Tv),
    ]
    .into_iter()
    .map(|(name, kind)| DeviceConfig {
        name: name.to_string(),
        kind,
    })
    .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.path, PathBuf::from("devices.txt"));
        assert_eq!(config.logging.filter, "casita=info");
        assert_eq!(config.devices.len(), 6);
        assert_eq!(config.devices[0].name, "Bedroom Light");
        assert_eq!(config.devices[5].kind, DeviceKind::Tv);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.path, PathBuf::from("devices.txt"));
        assert_eq!(config.devices.len(), 6);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [storage]
            path = 'home.txt'

            [logging]
            filter = 'debug'

            [[devices]]
            name = 'Desk Lamp'
            kind = 'Light'

            [[devices]]
            name = 'Projector'
            kind = 'TV'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("home.txt"));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.devices[1].kind, DeviceKind::Tv);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'casita=trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "casita=trace");
        assert_eq!(config.storage.path, PathBuf::from("devices.txt"));
        assert_eq!(config.devices.len(), 6);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_device_kind_in_toml() {
        let toml = "
            [[devices]]
            name = 'Toast'
            kind = 'Toaster'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.devices.len(), 6);
    }

    #[test]
    fn should_reject_empty_device_name() {
        let mut config = Config::default();
        config.devices[0].name.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_configuration() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }
}
