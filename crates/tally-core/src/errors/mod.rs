//! Error types for every Tally subsystem.
//!
//! Subsystem errors convert into [`TallyError`] via `From`, so `?` works
//! across crate boundaries.

mod label_error;
mod store_error;

pub use label_error::LabelError;
pub use store_error::StoreError;

/// Top-level error for the Tally classifier.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("label store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("label error: {0}")]
    LabelError(#[from] LabelError),

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },

    #[error("input text is empty")]
    EmptyInput,

    #[error("no trained model is available")]
    ModelNotReady,

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the workspace.
pub type TallyResult<T> = Result<T, TallyError>;
