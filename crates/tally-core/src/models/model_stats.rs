use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Size of a trained Bayes model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    pub label_count: usize,
    pub vocabulary_size: usize,
    pub total_documents: u64,
    /// Training documents per composite label.
    pub documents_per_label: BTreeMap<String, u64>,
}
