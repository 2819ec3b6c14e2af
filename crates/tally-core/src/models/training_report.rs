use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one successful training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Id of the generation that was published.
    pub generation: u64,
    pub examples_used: usize,
    /// Examples dropped because their label was malformed.
    pub examples_skipped: usize,
    /// True when the store was empty and the seed examples were used.
    pub seeded: bool,
    pub label_count: usize,
    pub vocabulary_size: usize,
    /// blake3 hex digest of the training pairs, in training order.
    pub fingerprint: String,
    pub trained_at: DateTime<Utc>,
}
