use serde::{Deserialize, Serialize};

use crate::constants::{GENERAL_SUB_CATEGORY, UNCATEGORIZED_CATEGORY};

/// The classifier's answer for one description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: String,
    pub sub_category: String,
    /// Normalized posterior of the winning label, in [0.0, 1.0].
    pub confidence: f64,
}

impl Prediction {
    pub fn new(category: impl Into<String>, sub_category: impl Into<String>, confidence: f64) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// `Uncategorized / General` with zero confidence.
    pub fn uncategorized() -> Self {
        Self::new(UNCATEGORIZED_CATEGORY, GENERAL_SUB_CATEGORY, 0.0)
    }

    /// Whether this is the fallback answer rather than a model guess.
    pub fn is_uncategorized(&self) -> bool {
        self.category == UNCATEGORIZED_CATEGORY && self.confidence == 0.0
    }
}
