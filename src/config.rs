//! Calculator configuration
//!
//! Loaded from TOML. Every field is optional; an empty file yields the
//! built-in rate table and default bind address.
//!
//! ```toml
//! reference = "USD"
//!
//! [[rates]]
//! code = "USD"
//! rate = 1.0
//!
//! [[rates]]
//! code = "EUR"
//! rate = 0.92
//!
//! [server]
//! bind = "0.0.0.0:8000"
//! ```

use crate::currency::{CurrencyRate, RateTable, REFERENCE_CURRENCY};
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default address for the HTTP adapter
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_reference")]
    pub reference: String,
    /// Custom rate table; the built-in table is used when empty
    #[serde(default)]
    pub rates: Vec<CurrencyRate>,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_reference() -> String {
    REFERENCE_CURRENCY.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            rates: Vec::new(),
            server: ServerConfig::default(),
        }
    }
}

/// `~/.rusty-calculator/config.toml`, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rusty-calculator").join("config.toml"))
}

impl CalculatorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Read and parse a config file; a missing or malformed file is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load. Without one, the default location is tried and
    /// any problem there falls back to the built-in defaults with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        match default_config_path() {
            Some(default_path) if default_path.exists() => {
                match Self::from_file(&default_path) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        log::warn!(
                            "Ignoring invalid config at {}: {}",
                            default_path.display(),
                            e
                        );
                        Ok(Self::default())
                    }
                }
            }
            _ => Ok(Self::default()),
        }
    }

    /// Build the validated rate table this config describes
    pub fn rate_table(&self) -> Result<RateTable> {
        if self.rates.is_empty() {
            if !self.reference.eq_ignore_ascii_case(REFERENCE_CURRENCY) {
                return Err(CalcError::ConfigError(format!(
                    "Reference {} requires a custom [[rates]] table",
                    self.reference
                )));
            }
            return Ok(RateTable::builtin());
        }

        RateTable::new(
            &self.reference,
            self.rates.iter().map(|r| (r.code.as_str(), r.rate)),
        )
    }
}
