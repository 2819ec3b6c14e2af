//! Span definitions per operation: training and classification.

/// Create a training span.
#[macro_export]
macro_rules! training_span {
    ($trigger:expr) => {
        tracing::info_span!("tally.training", trigger = %$trigger)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($text_len:expr) => {
        tracing::debug_span!("tally.classify", text_len = $text_len)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAINING: &str = "tally.training";
    pub const CLASSIFY: &str = "tally.classify";
}
