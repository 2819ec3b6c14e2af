//! ModelCache — holds the current trained generation, swapped whole on retrain.
//!
//! States: `Empty` → `Ready(g1)` → `Ready(g2)` → ...
//! Readers clone an `Arc<Generation>` and keep using it even after a newer
//! generation is published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tally_core::models::TrainingReport;

use crate::bayes::BayesModel;

/// Where a generation's training data came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    pub examples_used: usize,
    pub examples_skipped: usize,
    /// Trained on the configured seed examples because the store was empty.
    pub seeded: bool,
    /// blake3 hex digest of the (text, label) pairs in training order.
    pub fingerprint: String,
}

/// One immutable, fully trained model snapshot.
#[derive(Debug)]
pub struct Generation {
    id: u64,
    model: BayesModel,
    provenance: Provenance,
    trained_at: DateTime<Utc>,
}

impl Generation {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn model(&self) -> &BayesModel {
        &self.model
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn report(&self) -> TrainingReport {
        TrainingReport {
            generation: self.id,
            examples_used: self.provenance.examples_used,
            examples_skipped: self.provenance.examples_skipped,
            seeded: self.provenance.seeded,
            label_count: self.model.label_count(),
            vocabulary_size: self.model.vocabulary_size(),
            fingerprint: self.provenance.fingerprint.clone(),
            trained_at: self.trained_at,
        }
    }
}

/// Observable cache state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Ready { generation: u64 },
}

/// Process-wide holder of at most one current generation.
#[derive(Debug, Default)]
pub struct ModelCache {
    current: RwLock<Option<Arc<Generation>>>,
    last_id: AtomicU64,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current generation, if any.
    pub fn current(&self) -> Option<Arc<Generation>> {
        // The slot is only ever replaced by a single assignment, so a
        // poisoned lock still guards a whole generation.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> CacheState {
        match self.current() {
            Some(generation) => CacheState::Ready {
                generation: generation.id,
            },
            None => CacheState::Empty,
        }
    }

    /// Install a fully trained model as the new current generation.
    ///
    /// Ids are assigned under the write lock, so publish order and id order
    /// agree. Concurrent publishers: the last one wins.
    pub fn publish(&self, model: BayesModel, provenance: Provenance) -> Arc<Generation> {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let generation = Arc::new(Generation {
            id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            model,
            provenance,
            trained_at: Utc::now(),
        });
        *slot = Some(Arc::clone(&generation));
        generation
    }

    /// Drop the current generation. Ids keep increasing across resets.
    pub fn reset(&self) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
