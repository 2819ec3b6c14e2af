use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use tally_classifier::training::build_model;
use tally_classifier::ClassificationService;
use tally_core::config::ClassifierConfig;
use tally_core::models::Example;
use tally_storage::MemoryLabelStore;

/// ~1K synthetic statement lines over 20 labels.
fn build_corpus() -> Vec<Example> {
    let merchants = [
        "uber", "lyft", "shell", "chevron", "starbucks", "peets", "chipotle", "sweetgreen",
        "safeway", "kroger", "netflix", "hulu", "comcast", "verizon", "amazon", "target",
        "delta", "united", "cvs", "walgreens",
    ];
    (0..1_000)
        .map(|i| {
            let m = merchants[i % merchants.len()];
            Example::new(
                format!("{m} purchase {} ref {}", i % 37, i % 11),
                format!("Category{}", i % merchants.len() / 2),
                m.to_string(),
            )
        })
        .collect()
}

fn bench_training_1k(c: &mut Criterion) {
    let corpus = build_corpus();
    c.bench_function("train_1k_examples", |b| {
        b.iter(|| build_model(&corpus, 1.0).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let store = Arc::new(MemoryLabelStore::with_examples(build_corpus()));
    let service = ClassificationService::new(store, ClassifierConfig::default()).unwrap();
    service.train().unwrap();
    c.bench_function("classify_short_description", |b| {
        b.iter(|| service.classify("STARBUCKS purchase 12 ref 3"))
    });
}

criterion_group!(benches, bench_training_1k, bench_classify);
criterion_main!(benches);
