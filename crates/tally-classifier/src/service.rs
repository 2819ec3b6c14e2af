//! ClassificationService — train / classify / record_correction over a label store.
//!
//! Construct one per process and share it by reference or `Arc`. It owns the
//! [`ModelCache`]; nothing here is global.

use std::sync::{Arc, Mutex, PoisonError};

use tally_core::config::ClassifierConfig;
use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::{Example, ModelStats, Prediction, TrainingReport};
use tally_core::traits::ILabelStore;
use tally_observability::{classify_span, training_span, ClassifierMetrics};
use tracing::{debug, info, warn};

use crate::cache::{CacheState, Generation, ModelCache};
use crate::label;
use crate::tokenizer;
use crate::training;

/// What `classify` does when no generation has been trained yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPolicy {
    /// Run a full training synchronously before answering.
    TrainOnFirstUse,
    /// Answer `Uncategorized` until `train()` is called explicitly.
    Never,
}

/// Orchestrates training and prediction for one label store.
pub struct ClassificationService {
    store: Arc<dyn ILabelStore>,
    config: ClassifierConfig,
    bootstrap: BootstrapPolicy,
    cache: ModelCache,
    /// Serializes implicit first-use training so concurrent callers train once.
    bootstrap_lock: Mutex<()>,
    metrics: Arc<ClassifierMetrics>,
}

impl ClassificationService {
    /// Create a service. The bootstrap policy follows `config.lazy_bootstrap`.
    pub fn new(store: Arc<dyn ILabelStore>, config: ClassifierConfig) -> TallyResult<Self> {
        config.validate()?;
        let bootstrap = if config.lazy_bootstrap {
            BootstrapPolicy::TrainOnFirstUse
        } else {
            BootstrapPolicy::Never
        };
        Ok(Self {
            store,
            config,
            bootstrap,
            cache: ModelCache::new(),
            bootstrap_lock: Mutex::new(()),
            metrics: Arc::new(ClassifierMetrics::new()),
        })
    }

    /// Override the bootstrap policy.
    pub fn with_bootstrap_policy(mut self, policy: BootstrapPolicy) -> Self {
        self.bootstrap = policy;
        self
    }

    /// Report into a shared metrics handle.
    pub fn with_metrics(mut self, metrics: Arc<ClassifierMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Full retrain from the current contents of the label store.
    ///
    /// On a store failure the previous generation stays in place and
    /// `TrainingFailed` is returned.
    pub fn train(&self) -> TallyResult<TrainingReport> {
        let span = training_span!("explicit");
        let _entered = span.enter();
        self.train_generation().map(|generation| generation.report())
    }

    /// Persist a corrected example, then retrain so the next prediction uses it.
    pub fn record_correction(&self, example: &Example) -> TallyResult<TrainingReport> {
        let span = training_span!("correction");
        let _entered = span.enter();

        label::encode(&example.category, &example.sub_category)?;
        self.store.append(example)?;
        info!(
            category = %example.category,
            sub_category = %example.sub_category,
            "correction stored"
        );
        self.train_generation().map(|generation| generation.report())
    }

    /// Classify `text`, reporting why no model answer was possible.
    ///
    /// Errors: `EmptyInput` for text without tokens, `ModelNotReady` when the
    /// cache is empty and bootstrapping is disabled, `TrainingFailed` when the
    /// implicit first training cannot reach the store. A low-confidence or
    /// evidence-free result is not an error: it is the `Uncategorized` answer.
    pub fn try_classify(&self, text: &str) -> TallyResult<Prediction> {
        let span = classify_span!(text.len());
        let _entered = span.enter();

        let tokens = tokenizer::tokenize(text);
        if tokens.is_empty() {
            return Err(TallyError::EmptyInput);
        }

        let generation = self.ensure_generation()?;
        let prediction = self.predict_with(&generation, &tokens);
        self.metrics
            .record_classification(prediction.is_uncategorized());
        Ok(prediction)
    }

    /// Classify `text`. Never fails: every error resolves to `Uncategorized`.
    pub fn classify(&self, text: &str) -> Prediction {
        match self.try_classify(text) {
            Ok(prediction) => prediction,
            Err(TallyError::EmptyInput) => {
                debug!("blank description, answering uncategorized");
                self.metrics.record_classification(true);
                Prediction::uncategorized()
            }
            Err(e) => {
                warn!(error = %e, "classification unavailable, answering uncategorized");
                self.metrics.record_classification(true);
                Prediction::uncategorized()
            }
        }
    }

    pub fn state(&self) -> CacheState {
        self.cache.state()
    }

    pub fn current_generation(&self) -> Option<Arc<Generation>> {
        self.cache.current()
    }

    pub fn model_stats(&self) -> Option<ModelStats> {
        self.cache.current().map(|generation| generation.model().stats())
    }

    /// Drop the trained model. The next `classify` bootstraps again (if allowed).
    pub fn reset(&self) {
        self.cache.reset();
        info!("model cache reset");
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn bootstrap_policy(&self) -> BootstrapPolicy {
        self.bootstrap
    }

    pub fn metrics(&self) -> &Arc<ClassifierMetrics> {
        &self.metrics
    }

    fn train_generation(&self) -> TallyResult<Arc<Generation>> {
        let examples = match self.store.fetch_all() {
            Ok(examples) => examples,
            Err(e) => {
                self.metrics.record_failed_training();
                warn!(error = %e, "label store fetch failed, keeping current generation");
                return Err(TallyError::TrainingFailed {
                    reason: e.to_string(),
                });
            }
        };

        let seeded = examples.is_empty();
        let source = if seeded {
            &self.config.seed_examples
        } else {
            &examples
        };

        let (model, mut provenance) = training::build_model(source, self.config.smoothing)?;
        provenance.seeded = seeded;

        let generation = self.cache.publish(model, provenance);
        let provenance = generation.provenance();
        self.metrics.record_training(
            generation.id(),
            provenance.examples_skipped,
            provenance.seeded,
        );
        info!(
            generation = generation.id(),
            examples_used = provenance.examples_used,
            examples_skipped = provenance.examples_skipped,
            seeded = provenance.seeded,
            labels = generation.model().label_count(),
            "model generation published"
        );
        Ok(generation)
    }

    fn ensure_generation(&self) -> TallyResult<Arc<Generation>> {
        if let Some(generation) = self.cache.current() {
            return Ok(generation);
        }
        match self.bootstrap {
            BootstrapPolicy::Never => Err(TallyError::ModelNotReady),
            BootstrapPolicy::TrainOnFirstUse => {
                let _guard = self
                    .bootstrap_lock
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                // Another caller may have trained while we waited.
                if let Some(generation) = self.cache.current() {
                    return Ok(generation);
                }
                let span = training_span!("bootstrap");
                let _entered = span.enter();
                self.train_generation()
            }
        }
    }

    fn predict_with(&self, generation: &Generation, tokens: &[String]) -> Prediction {
        let model = generation.model();
        if self.config.require_known_tokens && model.known_tokens(tokens) == 0 {
            debug!(generation = generation.id(), "no known tokens, answering uncategorized");
            return Prediction::uncategorized();
        }

        match model.score(tokens).into_iter().next() {
            Some(top) if top.probability >= self.config.confidence_floor => {
                let (category, sub_category) = label::decode(&top.label);
                Prediction::new(category, sub_category, top.probability)
            }
            Some(top) => {
                debug!(
                    label = %top.label,
                    probability = top.probability,
                    floor = self.config.confidence_floor,
                    "top label below confidence floor"
                );
                Prediction::uncategorized()
            }
            None => Prediction::uncategorized(),
        }
    }
}
