/// Composite label errors.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("invalid label {category:?}/{sub_category:?}: {reason}")]
    InvalidLabel {
        category: String,
        sub_category: String,
        reason: String,
    },
}
