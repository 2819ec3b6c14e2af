use proptest::prelude::*;
use tally_core::models::Example;
use tally_core::traits::ILabelStore;
use tally_storage::{MemoryLabelStore, SqliteLabelStore};

fn example_strategy() -> impl Strategy<Value = Example> {
    ("\\PC{0,40}", "[A-Za-z ]{1,20}", "[A-Za-z ]{0,20}")
        .prop_map(|(text, category, sub)| Example::new(text, category, sub))
}

proptest! {
    #[test]
    fn sqlite_returns_exactly_what_was_appended(examples in prop::collection::vec(example_strategy(), 0..20)) {
        let store = SqliteLabelStore::open_in_memory().unwrap();
        for example in &examples {
            store.append(example).unwrap();
        }
        prop_assert_eq!(store.fetch_all().unwrap(), examples.clone());
        prop_assert_eq!(store.count().unwrap(), examples.len());
    }

    #[test]
    fn memory_and_sqlite_stores_agree(examples in prop::collection::vec(example_strategy(), 0..20)) {
        let sqlite = SqliteLabelStore::open_in_memory().unwrap();
        let memory = MemoryLabelStore::new();
        for example in &examples {
            sqlite.append(example).unwrap();
            memory.append(example).unwrap();
        }
        prop_assert_eq!(sqlite.fetch_all().unwrap(), memory.fetch_all().unwrap());
    }
}
