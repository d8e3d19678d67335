//! Configuration for code parsing.
//!
//! Loaded from JSON, or TOML with the `toml-config` feature.

use serde::{Deserialize, Serialize};

use crate::error::{IsbnError, Result};
use crate::ValidationLevel;

/// Parsing and validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct IsbnConfig {
    /// Which kinds count as valid
    pub validation_level: ValidationLevel,
    /// Resolve UPC-A barcodes from known book vendors to ISBN-10
    pub upc_lookup: bool,
}

impl Default for IsbnConfig {
    fn default() -> Self {
        Self {
            validation_level: ValidationLevel::Strict,
            upc_lookup: true,
        }
    }
}

impl IsbnConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(validation_level: ValidationLevel) -> Self {
        Self {
            validation_level,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| IsbnError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| IsbnError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IsbnError::Config(e.to_string()))
    }

    /// Validate configuration values
    ///
    /// Every combination of level and lookup is usable, so this never
    /// returns an error today. Strict validation with the UPC lookup off
    /// logs a warning, since it rejects every UPC-A barcode.
    pub fn validate(&self) -> Result<()> {
        if self.validation_level == ValidationLevel::Strict && !self.upc_lookup {
            tracing::warn!("strict validation without UPC lookup rejects all UPC-A barcodes");
        }
        Ok(())
    }
}
