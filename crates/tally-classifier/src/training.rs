//! Builds a fresh, finalized model from a batch of labeled examples.

use tally_core::errors::TallyResult;
use tally_core::models::Example;
use tracing::warn;

use crate::bayes::BayesModel;
use crate::cache::Provenance;
use crate::label;
use crate::tokenizer;

/// Train a private model on `examples`.
///
/// Examples whose label fails to encode are skipped with a warning and
/// counted in [`Provenance::examples_skipped`]; the rest still train.
/// `Provenance::seeded` is left `false` for the caller to set.
pub fn build_model(examples: &[Example], smoothing: f64) -> TallyResult<(BayesModel, Provenance)> {
    let mut model = BayesModel::with_smoothing(smoothing)?;
    let mut hasher = blake3::Hasher::new();
    let mut provenance = Provenance::default();

    for example in examples {
        let composite = match label::encode(&example.category, &example.sub_category) {
            Ok(composite) => composite,
            Err(e) => {
                warn!(text = %example.text, error = %e, "skipping example with invalid label");
                provenance.examples_skipped += 1;
                continue;
            }
        };
        let tokens = tokenizer::tokenize(&example.text);
        model.add_example(&tokens, &composite);

        hasher.update(example.text.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(composite.as_bytes());
        hasher.update(&[0x1e]);
        provenance.examples_used += 1;
    }

    model.finalize();
    provenance.fingerprint = hasher.finalize().to_hex().to_string();
    Ok((model, provenance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_invalid_labels_and_keeps_the_rest() {
        let examples = vec![
            Example::new("Uber ride", "Transportation", "Rideshare"),
            Example::new("mystery", "", "Coffee"),
            Example::new("Bad sep", "Food:Fast", "Burgers"),
            Example::new("Starbucks", "Dining", "Coffee"),
        ];
        let (model, provenance) = build_model(&examples, 1.0).unwrap();
        assert_eq!(provenance.examples_used, 2);
        assert_eq!(provenance.examples_skipped, 2);
        assert_eq!(model.label_count(), 2);
        assert!(model.is_finalized());
    }

    #[test]
    fn blank_sub_category_trains_under_general() {
        let examples = vec![
            Example::new("Whole Foods", "Food", ""),
            Example::new("Trader Joes", "Food", "General"),
        ];
        let (model, _) = build_model(&examples, 1.0).unwrap();
        assert_eq!(model.label_count(), 1);
        assert_eq!(model.stats().documents_per_label["Food:General"], 2);
    }

    #[test]
    fn fingerprint_tracks_training_input() {
        let a = vec![Example::new("Uber", "Transportation", "Rideshare")];
        let b = vec![Example::new("Lyft", "Transportation", "Rideshare")];
        let (_, pa1) = build_model(&a, 1.0).unwrap();
        let (_, pa2) = build_model(&a, 1.0).unwrap();
        let (_, pb) = build_model(&b, 1.0).unwrap();
        assert_eq!(pa1.fingerprint, pa2.fingerprint);
        assert_ne!(pa1.fingerprint, pb.fingerprint);
        assert_eq!(pa1.fingerprint.len(), 64);
    }

    #[test]
    fn invalid_smoothing_is_an_error() {
        assert!(build_model(&[], 0.0).is_err());
    }
}
