//! Property-based tests for the history log.
//!
//! For any sequence of visits, the log holds each distinct URL exactly once,
//! in order of first visit.

use std::collections::HashSet;

use paperbrowser::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use proptest::prelude::*;

fn arb_visits() -> impl Strategy<Value = Vec<String>> {
    // A small alphabet so repeats are common.
    prop::collection::vec("https://[a-d]\\.com/[a-c]?", 0..80)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_history_is_first_visit_order_without_duplicates(visits in arb_visits()) {
        let mut history = HistoryManager::new();
        let mut expected: Vec<String> = Vec::new();

        for url in &visits {
            let added = history.record_visit(url);
            prop_assert_eq!(added, !expected.contains(url));
            if added {
                expected.push(url.clone());
            }
        }

        prop_assert_eq!(history.list_history(), expected.as_slice());
        let distinct: HashSet<&String> = history.list_history().iter().collect();
        prop_assert_eq!(distinct.len(), history.len());
    }
}
