//! Property-based persistence tests.
//!
//! Uses proptest to verify:
//! 1. Any task collection survives a save → load round-trip, including
//!    arbitrary non-ASCII text, preserving content and order.
//! 2. Arbitrary text in the tasks file never panics the loader -- it
//!    yields `Ok` (almost always an empty list).
//! 3. Any sequence of adds yields ids 1, 2, 3, ... regardless of
//!    title/description content.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use ticklist_store::store::TaskStore;
use ticklist_store::task::Task;

// --- Strategies ---

/// Strategy for a task with arbitrary text fields and done flag.
///
/// Ids are kept in a sane range; uniqueness is not required for the
/// round-trip property.
fn arb_task() -> impl Strategy<Value = Task> {
    (1..10_000u64, ".*", ".*", any::<bool>()).prop_map(|(id, title, description, done)| {
        let mut task = Task::new(id, &title, &description);
        task.done = done;
        task
    })
}

proptest! {
    #[test]
    fn save_load_round_trip(tasks in prop::collection::vec(arb_task(), 0..16)) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        store.save(&tasks).unwrap();
        prop_assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn arbitrary_file_content_never_panics(junk in ".*") {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        std::fs::write(store.path(), &junk).unwrap();
        prop_assert!(store.load().is_ok());
    }

    #[test]
    fn add_ids_count_up_from_one(texts in prop::collection::vec((".{0,20}", ".{0,20}"), 1..10)) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.json"));

        for (expected, (title, desc)) in (1u64..).zip(&texts) {
            let task = store.add(title, desc).unwrap();
            prop_assert_eq!(task.id, expected);
        }
    }
}
