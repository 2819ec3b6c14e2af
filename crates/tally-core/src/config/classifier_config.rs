//! Configuration for the classification engine.
//!
//! # Examples
//!
//! ```
//! use tally_core::config::ClassifierConfig;
//!
//! let config = ClassifierConfig::default();
//! assert!(config.lazy_bootstrap);
//! assert!(!config.require_known_tokens);
//! assert!((config.confidence_floor - 0.0001).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{TallyError, TallyResult};
use crate::models::Example;

/// Classification engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Top-result probability below which classification falls back to
    /// "Uncategorized". A probability equal to the floor passes. Default: 0.0001.
    ///
    /// Probabilities are normalized across labels, so the top one is never
    /// below `1 / label_count`. A floor at or under that bound never fires:
    /// the default only matters past 10,000 labels. Raise it (e.g. 0.6) to
    /// reject near-ties.
    pub confidence_floor: f64,
    /// Additive smoothing constant for token likelihoods. Must be > 0. Default: 1.0.
    pub smoothing: f64,
    /// Train on the first classification when no model exists yet. Default: true.
    pub lazy_bootstrap: bool,
    /// Answer "Uncategorized" when no input token was seen in training,
    /// instead of letting the label prior decide. Default: false.
    pub require_known_tokens: bool,
    /// Examples trained on when the label store is empty.
    pub seed_examples: Vec<Example>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            smoothing: defaults::DEFAULT_SMOOTHING,
            lazy_bootstrap: true,
            require_known_tokens: false,
            seed_examples: defaults::default_seed_examples(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> TallyResult<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(TallyError::ConfigError {
                reason: format!("smoothing must be a positive number, got {}", self.smoothing),
            });
        }
        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(TallyError::ConfigError {
                reason: format!(
                    "confidence_floor must be within [0, 1], got {}",
                    self.confidence_floor
                ),
            });
        }
        Ok(())
    }
}
