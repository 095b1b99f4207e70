//! File-backed task store: read the whole file, apply one operation, write
//! the whole file back.
//!
//! The tasks file is a pretty-printed JSON array of task records. A missing
//! file and an unparseable file both load as an empty list -- only I/O
//! failures (an unreadable path, an unwritable destination) surface as
//! [`StoreError`]. The store takes its path at construction; resolving a
//! default location is the caller's concern.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::task::Task;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read the tasks file (other than it not existing).
    #[error("failed to read tasks file {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the tasks file.
    #[error("failed to write tasks file {path}: {source}")]
    Write {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to serialize the task list to JSON.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a [`TaskStore::complete`] call.
///
/// "Not found" is a normal reported outcome, not an error: nothing was
/// mutated and the file on disk is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The task with the given id is now marked done (idempotent -- the
    /// task may already have been done).
    Completed(u64),
    /// No task with the given id exists; the collection was not saved.
    NotFound(u64),
}

/// Mediates all reads and writes of the task collection.
///
/// Stateless between calls: every operation reconstructs the collection
/// from the file and discards it when done.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file need not exist yet; it is created on the first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the task collection from the backing file.
    ///
    /// A missing file yields an empty list. A file that is not valid JSON
    /// for a task array also yields an empty list; the parse failure is
    /// logged at `warn` but deliberately not surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] for I/O failures other than the file
    /// not existing.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "tasks file is not valid JSON, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes the full collection to the backing file, replacing any
    /// existing content.
    ///
    /// Output is pretty-printed JSON with the array as the top-level value.
    /// Non-ASCII text is written verbatim, not escaped. The parent
    /// directory is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the destination is not writable,
    /// or [`StoreError::Serialize`] if encoding fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Appends a new task and persists the updated collection.
    ///
    /// The new id is one past the highest existing id (1 for an empty
    /// collection), so ids stay unique even if gaps ever appeared. Title
    /// validation is the caller's responsibility; the store accepts any
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be loaded or saved.
    pub fn add(&self, title: &str, description: &str) -> Result<Task, StoreError> {
        let mut tasks = self.load()?;
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(id, title, description);

        tasks.push(task.clone());
        self.save(&tasks)?;

        tracing::debug!(id, title, "added task");
        Ok(task)
    }

    /// Loads the collection for display. Read-only; nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] for I/O failures other than a missing
    /// file.
    pub fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.load()
    }

    /// Marks the task with the given id as done and persists the change.
    ///
    /// Id matching is integer value equality; the first match in
    /// collection order wins. Re-completing an already-done task is a
    /// no-op that still reports [`CompleteOutcome::Completed`]. When no
    /// task matches, nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be loaded or saved.
    pub fn complete(&self, id: u64) -> Result<CompleteOutcome, StoreError> {
        let mut tasks = self.load()?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "no task with requested id");
            return Ok(CompleteOutcome::NotFound(id));
        };
        task.done = true;

        self.save(&tasks)?;
        Ok(CompleteOutcome::Completed(id))
    }
}
