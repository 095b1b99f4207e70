//! The task record persisted by the store.
//!
//! A [`Task`] maps one-to-one onto a record in the tasks file: integer id,
//! title, description, creation timestamp, completion flag. The `Display`
//! impl renders the one-line listing form used by the CLI.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Glyph shown in a listing line for a completed task.
const DONE_GLYPH: char = '✓';

/// A single to-do item.
///
/// IDs are assigned by the store, never by callers; `created_at` is stamped
/// once at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Positive integer id, unique within the collection.
    pub id: u64,
    /// Short human-readable title.
    pub title: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// UTC creation instant, ISO-8601 with a trailing `Z`.
    pub created_at: String,
    /// Whether the task has been marked complete.
    pub done: bool,
}

impl Task {
    /// Creates a new open task stamped with the current UTC instant.
    #[must_use]
    pub fn new(id: u64, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            done: false,
        }
    }

    /// Returns the status glyph for listing output: `✓` if done, a space
    /// otherwise.
    #[must_use]
    pub const fn status_glyph(&self) -> char {
        if self.done { DONE_GLYPH } else { ' ' }
    }
}

impl std::fmt::Display for Task {
    /// One listing line: `[<glyph>] <id>: <title> - <description>`.
    ///
    /// An empty description still renders the trailing separator, so the
    /// line shape is stable across tasks.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.status_glyph(),
            self.id,
            self.title,
            self.description
        )
    }
}
