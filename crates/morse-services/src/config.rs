//! Keyer settings stored as TOML.
//!
//! ```toml
//! standard = "extended-international"
//!
//! [rate]
//! kind = "farnsworth"
//! overall_wpm = 12.0
//! char_wpm = 20.0
//! ```

use std::path::{Path, PathBuf};

use morse_core::{BuiltinStandard, MorseError, RateConfig, Standard};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not write config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Morse(#[from] MorseError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyerConfig {
    #[serde(default)]
    pub standard: BuiltinStandard,
    #[serde(default)]
    pub rate: RateConfig,
}

impl KeyerConfig {
    /// Parse and validate
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.rate.validate().map_err(MorseError::from)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured standard, with its timing set to the configured rate
    pub fn into_standard(self) -> Result<Standard, ConfigError> {
        Ok(Standard::with_rate(self.rate, self.standard.symbols())?)
    }
}

/// `<config dir>/morse/config.toml`, or the working directory when the
/// platform has no config dir
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("morse")
        .join("config.toml")
}

/// Load from the default path. A missing file gives the defaults; a file
/// that cannot be read or parsed is logged and also gives the defaults.
pub fn load_config() -> KeyerConfig {
    let path = config_path();
    if !path.exists() {
        return KeyerConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => {
            info!(path = %path.display(), standard = %config.standard, "Keyer config loaded");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unusable keyer config");
            KeyerConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<KeyerConfig, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    KeyerConfig::from_toml_str(&s)
}

pub fn save_config(config: &KeyerConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &KeyerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_toml_string()?)?;
    info!(path = %path.display(), "Keyer config saved");
    Ok(())
}
