//! Task model and file-backed task store for `Ticklist`.
//!
//! The store owns a single JSON file holding the full task list. Every
//! operation reads the whole file, applies one change in memory, and (for
//! mutating operations) writes the whole file back. There is no long-lived
//! in-memory state across operations -- the file is the source of truth.

pub mod store;
pub mod task;

pub use store::{CompleteOutcome, StoreError, TaskStore};
pub use task::Task;
