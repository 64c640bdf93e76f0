//! Configuration loading
//!
//! A TOML file supplies defaults, environment variables override the file,
//! and command-line flags override both.

use crate::error::{ErrorCode, ListFoldError};
use crate::halving::HalvingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable that overrides `log_level`
pub const LOG_LEVEL_ENV: &str = "LISTFOLD_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_level: Option<String>,
    pub halving: HalvingConfig,
}

/// Per-field overrides taken from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub initial_quantity: Option<f64>,
    pub steps: Option<u32>,
    pub divisor: Option<f64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ListFoldError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ListFoldError> {
        if !path.exists() {
            return Err(ListFoldError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("Configuration file not found: {}", path.display()),
                Some(path.to_path_buf()),
            ));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ListFoldError::from(e).with_context(path.display()))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("in {}", path.display())))?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides using `lookup` to resolve variables
    pub fn merge_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(log_level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = Some(log_level);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(initial_quantity) = overrides.initial_quantity {
            self.halving.initial_quantity = initial_quantity;
        }
        if let Some(steps) = overrides.steps {
            self.halving.steps = steps;
        }
        if let Some(divisor) = overrides.divisor {
            self.halving.divisor = divisor;
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
