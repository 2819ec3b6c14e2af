//! Atomic counters for training and classification activity.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters updated by the classification service.
///
/// All updates use relaxed atomics; a snapshot is not a consistent cut across
/// counters, only a per-counter reading.
#[derive(Debug, Default)]
pub struct ClassifierMetrics {
    trainings: AtomicU64,
    failed_trainings: AtomicU64,
    seeded_trainings: AtomicU64,
    skipped_examples: AtomicU64,
    classifications: AtomicU64,
    fallbacks: AtomicU64,
    last_generation: AtomicU64,
}

impl ClassifierMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a published generation.
    pub fn record_training(&self, generation: u64, skipped: usize, seeded: bool) {
        self.trainings.fetch_add(1, Ordering::Relaxed);
        self.skipped_examples
            .fetch_add(skipped as u64, Ordering::Relaxed);
        if seeded {
            self.seeded_trainings.fetch_add(1, Ordering::Relaxed);
        }
        self.last_generation.fetch_max(generation, Ordering::Relaxed);
    }

    pub fn record_failed_training(&self) {
        self.failed_trainings.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one classification and whether it ended in the fallback answer.
    pub fn record_classification(&self, fallback: bool) {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        if fallback {
            self.fallbacks.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let classifications = self.classifications.load(Ordering::Relaxed);
        let fallbacks = self.fallbacks.load(Ordering::Relaxed);
        MetricsSnapshot {
            trainings: self.trainings.load(Ordering::Relaxed),
            failed_trainings: self.failed_trainings.load(Ordering::Relaxed),
            seeded_trainings: self.seeded_trainings.load(Ordering::Relaxed),
            skipped_examples: self.skipped_examples.load(Ordering::Relaxed),
            classifications,
            fallbacks,
            fallback_rate: if classifications == 0 {
                0.0
            } else {
                fallbacks as f64 / classifications as f64
            },
            last_generation: self.last_generation.load(Ordering::Relaxed),
            taken_at: Utc::now(),
        }
    }
}

/// Point-in-time reading of [`ClassifierMetrics`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub trainings: u64,
    pub failed_trainings: u64,
    pub seeded_trainings: u64,
    pub skipped_examples: u64,
    pub classifications: u64,
    pub fallbacks: u64,
    pub fallback_rate: f64,
    /// Highest generation id published so far (0 before the first training).
    pub last_generation: u64,
    pub taken_at: DateTime<Utc>,
}

impl MetricsSnapshot {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
