//! In-process label store.

use std::sync::{PoisonError, RwLock};

use tally_core::errors::TallyResult;
use tally_core::models::Example;
use tally_core::traits::ILabelStore;

/// Label store backed by a `RwLock<Vec<Example>>`.
#[derive(Debug, Default)]
pub struct MemoryLabelStore {
    examples: RwLock<Vec<Example>>,
}

impl MemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_examples(examples: Vec<Example>) -> Self {
        Self {
            examples: RwLock::new(examples),
        }
    }
}

impl ILabelStore for MemoryLabelStore {
    fn fetch_all(&self) -> TallyResult<Vec<Example>> {
        Ok(self
            .examples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn append(&self, example: &Example) -> TallyResult<()> {
        self.examples
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(example.clone());
        Ok(())
    }

    fn count(&self) -> TallyResult<usize> {
        Ok(self
            .examples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len())
    }
}
