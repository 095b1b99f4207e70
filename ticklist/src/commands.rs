//! Command dispatch: one store operation per invocation, one status line
//! per outcome.
//!
//! [`execute`] returns the output lines instead of printing them so the
//! integration tests can assert on exact wording; the binary goes through
//! [`run`], which prints each line to stdout.

use ticklist_store::store::{CompleteOutcome, TaskStore};

use crate::config::{Command, Config};

/// Errors that can occur while executing a command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The task title was empty or whitespace-only.
    ///
    /// Enforced here, not in the store -- the store accepts any text.
    #[error("task title cannot be empty")]
    TitleEmpty,

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] ticklist_store::store::StoreError),
}

/// Executes a command against the configured tasks file and prints the
/// resulting status lines to stdout.
///
/// # Errors
///
/// Returns [`CommandError`] on an empty title or a failed store operation.
pub fn run(command: &Command, config: &Config) -> Result<(), CommandError> {
    for line in execute(command, config)? {
        println!("{line}");
    }
    Ok(())
}

/// Executes a command and returns its status lines.
///
/// `add` and `complete` produce exactly one line; `list` produces one line
/// per task, or a single "no tasks" line for an empty collection.
///
/// # Errors
///
/// Returns [`CommandError`] on an empty title or a failed store operation.
pub fn execute(command: &Command, config: &Config) -> Result<Vec<String>, CommandError> {
    let store = TaskStore::new(&config.tasks_file);

    match command {
        Command::Add { title, desc } => add(&store, title, desc),
        Command::List => list(&store),
        Command::Complete { id } => complete(&store, *id),
    }
}

fn add(store: &TaskStore, title: &str, desc: &str) -> Result<Vec<String>, CommandError> {
    if title.trim().is_empty() {
        return Err(CommandError::TitleEmpty);
    }

    let task = store.add(title, desc)?;
    Ok(vec![format!("Added task {}: {}", task.id, task.title)])
}

fn list(store: &TaskStore) -> Result<Vec<String>, CommandError> {
    let tasks = store.list()?;
    if tasks.is_empty() {
        return Ok(vec!["No tasks found.".to_string()]);
    }

    Ok(tasks.iter().map(ToString::to_string).collect())
}

fn complete(store: &TaskStore, id: u64) -> Result<Vec<String>, CommandError> {
    let line = match store.complete(id)? {
        CompleteOutcome::Completed(id) => format!("Marked task {id} complete."),
        CompleteOutcome::NotFound(id) => format!("No task found with id {id}."),
    };
    Ok(vec![line])
}
