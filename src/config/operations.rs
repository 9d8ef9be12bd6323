//! Config loading, validation, and discovery.

use super::model::Config;
use crate::annotation::MessageTemplate;
use crate::error::{DiffScanError, Result};
use std::path::Path;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".diffscan.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffScanError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffScanError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find and load the config for a run.
    ///
    /// Lookup order:
    /// 1. `explicit`, when given (must exist)
    /// 2. `.diffscan.yaml` in `dir`, when present
    /// 3. Built-in defaults
    pub fn discover<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            log::info!("loading config from {}", candidate.display());
            return Self::load(&candidate);
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                DiffScanError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffScanError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `message_template` must parse, using only `{old}` and `{new}`
    pub fn validate(&self) -> Result<()> {
        MessageTemplate::parse(&self.message_template).map_err(|e| {
            DiffScanError::UserError(format!("config validation failed: {}", e))
        })?;

        Ok(())
    }
}
