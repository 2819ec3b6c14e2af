//! Configuration for every Tally subsystem, loadable from TOML.
//!
//! Every field has a default, so an empty document is a valid config.

mod classifier_config;
pub mod defaults;
mod observability_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{TallyError, TallyResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub classifier: ClassifierConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl TallyConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(source: &str) -> TallyResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| TallyError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> TallyResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| TallyError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }

    /// Reject values the classifier cannot work with.
    pub fn validate(&self) -> TallyResult<()> {
        self.classifier.validate()
    }
}
