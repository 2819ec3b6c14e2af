//! # tally-observability
//!
//! Structured logging and counters for the classifier.
//!
//! - `tracing_setup`: subscriber installation and span macros for train/classify.
//! - `metrics`: lock-free counters with a serializable snapshot.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{ClassifierMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
