use std::sync::Arc;

use proptest::prelude::*;
use tally_classifier::training::build_model;
use tally_classifier::{label, tokenizer, ClassificationService};
use tally_core::config::ClassifierConfig;
use tally_core::models::Example;
use test_fixtures::FixtureStore;

fn label_part() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,12}( [A-Za-z0-9]{1,12})?"
}

/// A label part that may carry leading or trailing spaces.
fn padded_label_part() -> impl Strategy<Value = String> {
    (" {0,3}", label_part(), " {0,3}").prop_map(|(lead, core, trail)| format!("{lead}{core}{trail}"))
}

/// One document per label, each label with its own token alphabet.
fn separable_corpus() -> impl Strategy<Value = Vec<Example>> {
    prop::collection::vec(prop::collection::btree_set(0u8..40, 1..6), 2..6).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, words)| {
                let text = words
                    .iter()
                    .map(|w| format!("l{i}w{w}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                Example::new(text, format!("Cat{i}"), "Sub")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn tokenize_is_deterministic_and_normalized(text in "[A-Za-z0-9 ,.*#/-]{0,60}") {
        let tokens = tokenizer::tokenize(&text);
        prop_assert_eq!(&tokens, &tokenizer::tokenize(&text));
        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_alphanumeric()));
            prop_assert_eq!(token.clone(), token.to_lowercase());
        }
        prop_assert_eq!(tokens.is_empty(), tokenizer::is_blank(&text));
    }

    #[test]
    fn retokenizing_joined_tokens_is_identity(text in "[A-Za-z0-9 ,.*#/-]{0,60}") {
        let tokens = tokenizer::tokenize(&text);
        prop_assert_eq!(tokenizer::tokenize(&tokens.join(" ")), tokens);
    }

    #[test]
    fn label_round_trip(category in label_part(), sub in label_part()) {
        let encoded = label::encode(&category, &sub).unwrap();
        prop_assert_eq!(label::decode(&encoded), (category, sub));
    }

    #[test]
    fn label_round_trip_keeps_padding(category in padded_label_part(), sub in padded_label_part()) {
        let encoded = label::encode(&category, &sub).unwrap();
        prop_assert_eq!(label::decode(&encoded), (category, sub));
    }

    #[test]
    fn scores_are_sorted_and_normalized(
        corpus in separable_corpus(),
        query in "[a-z0-9 ]{0,30}",
    ) {
        let (model, _) = build_model(&corpus, 1.0).unwrap();
        let scores = model.score(&tokenizer::tokenize(&query));
        prop_assert_eq!(scores.len(), corpus.len());
        for pair in scores.windows(2) {
            prop_assert!(pair[0].log_score >= pair[1].log_score);
        }
        let total: f64 = scores.iter().map(|s| s.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        prop_assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.probability)));
    }

    #[test]
    fn training_text_classifies_as_its_own_label(corpus in separable_corpus()) {
        let store = Arc::new(FixtureStore::new(corpus.clone()));
        let service = ClassificationService::new(store, ClassifierConfig::default()).unwrap();
        for example in &corpus {
            let prediction = service.classify(&example.text);
            prop_assert_eq!(&prediction.category, &example.category);
            prop_assert_eq!(&prediction.sub_category, &example.sub_category);
            prop_assert!(prediction.confidence > 0.0);
        }
    }

    #[test]
    fn identical_input_trains_identical_models(
        corpus in separable_corpus(),
        query in "[a-z0-9 ]{0,30}",
    ) {
        let (a, pa) = build_model(&corpus, 1.0).unwrap();
        let (b, pb) = build_model(&corpus, 1.0).unwrap();
        let tokens = tokenizer::tokenize(&query);
        prop_assert_eq!(a.score(&tokens), b.score(&tokens));
        prop_assert_eq!(pa, pb);
    }
}
