//! # tally-core
//!
//! Foundation crate for the Tally transaction classifier.
//! Defines the shared types, the label store trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TallyConfig;
pub use errors::{TallyError, TallyResult};
pub use models::{Example, ModelStats, Prediction, TrainingReport};
pub use traits::ILabelStore;
