//! Shared test doubles and example sets for the Tally workspace.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use tally_core::errors::{StoreError, TallyResult};
use tally_core::models::Example;
use tally_core::traits::ILabelStore;

/// The two-label set used by the basic end-to-end scenario.
pub fn rideshare_and_coffee() -> Vec<Example> {
    vec![
        Example::new("Uber ride", "Transportation", "Rideshare"),
        Example::new("Starbucks coffee", "Dining", "Coffee"),
    ]
}

/// A small bank-statement style corpus with several categories.
pub fn sample_transactions() -> Vec<Example> {
    let rows: &[(&str, &str, &str)] = &[
        ("UBER *TRIP HELP.UBER.COM", "Transportation", "Rideshare"),
        ("LYFT RIDE SAT 10PM", "Transportation", "Rideshare"),
        ("SHELL OIL 5744 GAS", "Transportation", "Fuel"),
        ("CHEVRON GAS STATION", "Transportation", "Fuel"),
        ("STARBUCKS STORE 1123", "Dining", "Coffee"),
        ("BLUE BOTTLE COFFEE", "Dining", "Coffee"),
        ("CHIPOTLE ONLINE ORDER", "Dining", "Restaurants"),
        ("OLIVE GARDEN DINNER", "Dining", "Restaurants"),
        ("WHOLE FOODS MARKET", "Food", "Groceries"),
        ("TRADER JOES GROCERY", "Food", "Groceries"),
        ("NETFLIX.COM SUBSCRIPTION", "Entertainment", "Streaming"),
        ("SPOTIFY PREMIUM SUBSCRIPTION", "Entertainment", "Streaming"),
        ("PG&E ELECTRIC BILL", "Bills", "Utilities"),
        ("COMCAST INTERNET BILL", "Bills", "Utilities"),
    ];
    rows.iter()
        .map(|(text, category, sub)| Example::new(*text, *category, *sub))
        .collect()
}

/// In-memory store that counts fetches and can be switched offline.
#[derive(Default)]
pub struct FixtureStore {
    examples: Mutex<Vec<Example>>,
    fetches: AtomicUsize,
    offline: AtomicBool,
}

impl FixtureStore {
    pub fn new(examples: Vec<Example>) -> Self {
        Self {
            examples: Mutex::new(examples),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of `fetch_all` calls so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// While offline, every call fails with `StoreError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> TallyResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "fixture store is offline".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl ILabelStore for FixtureStore {
    fn fetch_all(&self) -> TallyResult<Vec<Example>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.examples.lock().unwrap().clone())
    }

    fn append(&self, example: &Example) -> TallyResult<()> {
        self.check_online()?;
        self.examples.lock().unwrap().push(example.clone());
        Ok(())
    }

    fn count(&self) -> TallyResult<usize> {
        self.check_online()?;
        Ok(self.examples.lock().unwrap().len())
    }
}

/// Store that is never reachable.
pub struct FailingStore;

impl ILabelStore for FailingStore {
    fn fetch_all(&self) -> TallyResult<Vec<Example>> {
        Err(StoreError::Unavailable {
            reason: "connection refused".into(),
        }
        .into())
    }

    fn append(&self, _: &Example) -> TallyResult<()> {
        Err(StoreError::Unavailable {
            reason: "connection refused".into(),
        }
        .into())
    }

    fn count(&self) -> TallyResult<usize> {
        Err(StoreError::Unavailable {
            reason: "connection refused".into(),
        }
        .into())
    }
}

/// Load examples from a JSON array of `{text, category, sub_category}` rows.
pub fn examples_from_json(json: &str) -> serde_json::Result<Vec<Example>> {
    serde_json::from_str(json)
}
