use serde::{Deserialize, Serialize};

/// A human-labeled transaction description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Free-text transaction description.
    pub text: String,
    pub category: String,
    pub sub_category: String,
}

impl Example {
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }
}
