use crate::errors::TallyResult;
use crate::models::Example;

/// Persistent source of labeled examples.
///
/// Implementations report transport or storage failures as
/// [`StoreError::Unavailable`](crate::errors::StoreError::Unavailable) or a
/// more specific [`StoreError`](crate::errors::StoreError) variant.
pub trait ILabelStore: Send + Sync {
    /// Every stored example, in insertion order.
    fn fetch_all(&self) -> TallyResult<Vec<Example>>;

    /// Persist one corrected example.
    fn append(&self, example: &Example) -> TallyResult<()>;

    /// Number of stored examples.
    fn count(&self) -> TallyResult<usize>;
}
