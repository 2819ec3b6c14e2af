//! Default values shared by the config structs.

use crate::models::Example;

/// Top-result probability below which the fallback prediction is returned.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.0001;

/// Additive (Laplace) smoothing constant.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

pub const DEFAULT_DB_PATH: &str = "tally.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Examples used to train when the label store is empty, so the classifier
/// can answer before any corrections exist.
pub fn default_seed_examples() -> Vec<Example> {
    vec![
        Example::new("Uber", "Transportation", "Rideshare"),
        Example::new("Starbucks", "Dining", "Dining"),
    ]
}
