//! Multinomial naive Bayes over token features.
//!
//! Training is a single counting pass; scoring is closed-form:
//!
//! ```text
//! log_score(l) = ln P(l) + Σ_t ln P(t | l)
//! P(l)         = docs(l) / docs_total
//! P(t | l)     = (count(t, l) + α) / (tokens(l) + α · |V|)
//! ```
//!
//! Tokens outside the vocabulary carry no evidence and are skipped. Additive
//! smoothing (α > 0) keeps a vocabulary token that was never seen under a
//! given label from zeroing that label out.

use std::collections::{BTreeMap, HashMap, HashSet};

use tally_core::config::defaults::DEFAULT_SMOOTHING;
use tally_core::errors::{TallyError, TallyResult};
use tally_core::models::ModelStats;

/// One label's posterior for a token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    /// Composite label as stored at training time.
    pub label: String,
    /// Unnormalized log-space posterior. Higher is more likely.
    pub log_score: f64,
    /// Posterior normalized across all labels, in [0.0, 1.0].
    pub probability: f64,
}

#[derive(Debug, Clone, Default)]
struct LabelCounts {
    documents: u64,
    tokens: u64,
    token_counts: HashMap<String, u64>,
}

/// Per-label terms that do not depend on the input.
#[derive(Debug, Clone, Copy)]
struct LabelTerms {
    log_prior: f64,
    log_denominator: f64,
}

/// Trainable naive Bayes classifier.
///
/// Labels are kept in a `BTreeMap` so scoring iterates them in a fixed order
/// and repeated runs over the same counts produce bit-identical scores.
#[derive(Debug, Clone)]
pub struct BayesModel {
    smoothing: f64,
    labels: BTreeMap<String, LabelCounts>,
    vocabulary: HashSet<String>,
    total_documents: u64,
    /// Cached [`LabelTerms`], aligned with `labels` iteration order.
    finalized: Option<Vec<LabelTerms>>,
}

impl Default for BayesModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BayesModel {
    /// Empty model with add-one smoothing.
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            labels: BTreeMap::new(),
            vocabulary: HashSet::new(),
            total_documents: 0,
            finalized: None,
        }
    }

    /// Empty model with a custom smoothing constant (finite, > 0).
    pub fn with_smoothing(smoothing: f64) -> TallyResult<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(TallyError::ConfigError {
                reason: format!("smoothing must be a positive number, got {smoothing}"),
            });
        }
        Ok(Self {
            smoothing,
            ..Self::new()
        })
    }

    /// Count one training document.
    ///
    /// Every token occurrence is counted (multinomial weighting). A document
    /// with no tokens still contributes to the label prior.
    pub fn add_example(&mut self, tokens: &[String], label: &str) {
        let counts = self.labels.entry(label.to_string()).or_default();
        counts.documents += 1;
        for token in tokens {
            *counts.token_counts.entry(token.clone()).or_insert(0) += 1;
            counts.tokens += 1;
            if !self.vocabulary.contains(token) {
                self.vocabulary.insert(token.clone());
            }
        }
        self.total_documents += 1;
        self.finalized = None;
    }

    /// Precompute log-priors and likelihood denominators.
    ///
    /// Optional: [`score`](Self::score) computes the same terms on the fly
    /// when the model has not been finalized (or was trained further since).
    pub fn finalize(&mut self) {
        let terms = self
            .labels
            .values()
            .map(|counts| self.terms_for(counts))
            .collect();
        self.finalized = Some(terms);
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Score every trained label against `tokens`, best first.
    ///
    /// Ties on `log_score` are ordered by label. A model with no labels
    /// returns an empty vector.
    pub fn score(&self, tokens: &[String]) -> Vec<LabelScore> {
        if self.labels.is_empty() {
            return Vec::new();
        }

        let known: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| self.vocabulary.contains(*t))
            .collect();

        let mut scores: Vec<LabelScore> = self
            .labels
            .iter()
            .enumerate()
            .map(|(idx, (label, counts))| {
                let terms = match &self.finalized {
                    Some(cached) => cached[idx],
                    None => self.terms_for(counts),
                };
                let log_likelihood: f64 = known
                    .iter()
                    .map(|token| {
                        let count = counts.token_counts.get(*token).copied().unwrap_or(0);
                        (count as f64 + self.smoothing).ln() - terms.log_denominator
                    })
                    .sum();
                LabelScore {
                    label: label.clone(),
                    log_score: terms.log_prior + log_likelihood,
                    probability: 0.0,
                }
            })
            .collect();

        normalize(&mut scores);
        scores.sort_by(|a, b| {
            b.log_score
                .total_cmp(&a.log_score)
                .then_with(|| a.label.cmp(&b.label))
        });
        scores
    }

    /// How many of `tokens` the model has seen during training.
    pub fn known_tokens(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|t| self.vocabulary.contains(t.as_str()))
            .count()
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            label_count: self.labels.len(),
            vocabulary_size: self.vocabulary.len(),
            total_documents: self.total_documents,
            documents_per_label: self
                .labels
                .iter()
                .map(|(label, counts)| (label.clone(), counts.documents))
                .collect(),
        }
    }

    fn terms_for(&self, counts: &LabelCounts) -> LabelTerms {
        let denominator = counts.tokens as f64 + self.smoothing * self.vocabulary.len() as f64;
        LabelTerms {
            log_prior: (counts.documents as f64 / self.total_documents as f64).ln(),
            log_denominator: denominator.ln(),
        }
    }
}

/// Fill in `probability` with a log-sum-exp softmax over `log_score`.
fn normalize(scores: &mut [LabelScore]) {
    let max = scores
        .iter()
        .map(|s| s.log_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let total: f64 = scores.iter().map(|s| (s.log_score - max).exp()).sum();
    for score in scores.iter_mut() {
        score.probability = (score.log_score - max).exp() / total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn two_label_model() -> BayesModel {
        let mut model = BayesModel::new();
        model.add_example(&toks(&["uber", "ride"]), "Transportation:Rideshare");
        model.add_example(&toks(&["starbucks", "coffee"]), "Dining:Coffee");
        model
    }

    #[test]
    fn empty_model_scores_nothing() {
        let model = BayesModel::new();
        assert!(model.is_empty());
        assert!(model.score(&toks(&["anything"])).is_empty());
    }

    #[test]
    fn counts_documents_tokens_and_vocabulary() {
        let mut model = BayesModel::new();
        model.add_example(&toks(&["coffee", "coffee", "beans"]), "Dining:Coffee");
        model.add_example(&toks(&["coffee"]), "Dining:Coffee");
        model.add_example(&toks(&["bus"]), "Transportation:Transit");

        let stats = model.stats();
        assert_eq!(stats.label_count, 2);
        assert_eq!(stats.vocabulary_size, 3);
        assert_eq!(stats.total_documents, 3);
        assert_eq!(stats.documents_per_label["Dining:Coffee"], 2);
        assert_eq!(stats.documents_per_label["Transportation:Transit"], 1);
    }

    #[test]
    fn matching_tokens_win() {
        let model = two_label_model();
        let scores = model.score(&toks(&["uber"]));
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].label, "Transportation:Rideshare");
        assert!(scores[0].log_score > scores[1].log_score);
    }

    #[test]
    fn hand_computed_posterior() {
        // |V| = 4, each label has 2 tokens and 1 document.
        // P(uber | T) = (1 + 1) / (2 + 4) = 1/3, P(uber | D) = 1/6.
        let model = two_label_model();
        let scores = model.score(&toks(&["uber"]));
        let expected_top = 0.5f64.ln() + (1.0f64 / 3.0).ln();
        assert!((scores[0].log_score - expected_top).abs() < 1e-12);
        assert!((scores[0].probability - 2.0 / 3.0).abs() < 1e-12);
        assert!((scores[1].probability - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unseen_label_token_pair_is_smoothed_not_zero() {
        let model = two_label_model();
        let scores = model.score(&toks(&["coffee"]));
        let loser = scores
            .iter()
            .find(|s| s.label == "Transportation:Rideshare")
            .unwrap();
        assert!(loser.log_score.is_finite());
        assert!(loser.probability > 0.0);
    }

    #[test]
    fn out_of_vocabulary_tokens_are_ignored() {
        let model = two_label_model();
        let with_noise = model.score(&toks(&["uber", "downtown", "trip"]));
        let without = model.score(&toks(&["uber"]));
        assert_eq!(with_noise, without);
        assert_eq!(model.known_tokens(&toks(&["uber", "downtown", "trip"])), 1);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let mut model = two_label_model();
        model.add_example(&toks(&["shell", "gas"]), "Transportation:Fuel");
        let total: f64 = model
            .score(&toks(&["gas", "coffee"]))
            .iter()
            .map(|s| s.probability)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ties_are_ordered_by_label() {
        let model = two_label_model();
        // No known tokens and equal priors: both labels tie.
        let scores = model.score(&[]);
        assert_eq!(scores[0].label, "Dining:Coffee");
        assert_eq!(scores[1].label, "Transportation:Rideshare");
        assert_eq!(scores[0].log_score, scores[1].log_score);
    }

    #[test]
    fn finalize_does_not_change_scores() {
        let mut model = two_label_model();
        let before = model.score(&toks(&["uber", "coffee", "ride"]));
        model.finalize();
        assert!(model.is_finalized());
        let after = model.score(&toks(&["uber", "coffee", "ride"]));
        assert_eq!(before, after);
    }

    #[test]
    fn training_after_finalize_invalidates_cache() {
        let mut model = two_label_model();
        model.finalize();
        model.add_example(&toks(&["lyft"]), "Transportation:Rideshare");
        assert!(!model.is_finalized());
        let scores = model.score(&toks(&["lyft"]));
        assert_eq!(scores[0].label, "Transportation:Rideshare");
    }

    #[test]
    fn rejects_non_positive_smoothing() {
        assert!(BayesModel::with_smoothing(0.0).is_err());
        assert!(BayesModel::with_smoothing(-1.0).is_err());
        assert!(BayesModel::with_smoothing(f64::NAN).is_err());
        assert_eq!(BayesModel::with_smoothing(0.5).unwrap().smoothing(), 0.5);
    }

    #[test]
    fn prior_decides_when_no_evidence() {
        let mut model = BayesModel::new();
        model.add_example(&toks(&["a"]), "A:X");
        model.add_example(&toks(&["b"]), "B:X");
        model.add_example(&toks(&["c"]), "B:X");
        let scores = model.score(&toks(&["zzz"]));
        assert_eq!(scores[0].label, "B:X");
    }
}
