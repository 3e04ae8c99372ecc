//! Configuration management for the dispatcher
//!
//! Loading from YAML files and the environment, plus validation.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::types::errors::{DispatchError, Result};
use std::path::Path;
use tracing::{debug, info};

impl DispatchConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DispatchError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| DispatchError::config(format!("Failed to parse config: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Validate, mapping failures to [`DispatchError::Config`]
    pub fn check(&self) -> Result<()> {
        debug!("Validating configuration");
        Validate::validate(self).map_err(DispatchError::config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DispatchError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
