//! Integration tests for the CLI command layer.
//!
//! Drives `commands::execute` against temp files and asserts on the exact
//! status lines the binary prints.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use ticklist::commands::{self, CommandError};
use ticklist::config::{Command, Config};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Builds a resolved config pointing at the given tasks file.
fn config_for(tasks_file: &Path) -> Config {
    Config {
        tasks_file: tasks_file.to_path_buf(),
        log_level: "warn".to_string(),
    }
}

/// Shorthand for an `add` command value.
fn add(title: &str, desc: &str) -> Command {
    Command::Add {
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Per-command output
// ---------------------------------------------------------------------------

#[test]
fn add_prints_one_confirmation_line() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("tasks.json"));

    let lines = commands::execute(&add("Buy groceries", "Milk, bread, eggs"), &config).unwrap();
    assert_eq!(lines, vec!["Added task 1: Buy groceries"]);
}

#[test]
fn add_rejects_whitespace_only_title() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("tasks.json"));

    let err = commands::execute(&add("   ", "desc"), &config).unwrap_err();
    assert!(matches!(err, CommandError::TitleEmpty));

    // Nothing may have been written.
    assert!(!config.tasks_file.exists());
}

#[test]
fn list_empty_prints_dedicated_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("tasks.json"));

    let lines = commands::execute(&Command::List, &config).unwrap();
    assert_eq!(lines, vec!["No tasks found."]);
}

#[test]
fn complete_known_and_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("tasks.json"));
    commands::execute(&add("a", ""), &config).unwrap();

    let lines = commands::execute(&Command::Complete { id: 1 }, &config).unwrap();
    assert_eq!(lines, vec!["Marked task 1 complete."]);

    let lines = commands::execute(&Command::Complete { id: 999 }, &config).unwrap();
    assert_eq!(lines, vec!["No task found with id 999."]);
}

#[test]
fn save_failure_surfaces_as_error() {
    let dir = tempfile::tempdir().unwrap();
    // The tasks "file" is a directory, so the save inside add must fail.
    let config = config_for(dir.path());

    let err = commands::execute(&add("doomed", ""), &config).unwrap_err();
    assert!(matches!(err, CommandError::Store(_)));
}

// ---------------------------------------------------------------------------
// The end-to-end scenario, through the CLI layer
// ---------------------------------------------------------------------------

#[test]
fn grocery_scenario_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("tasks.json"));

    commands::execute(&add("Buy groceries", "Milk, bread, eggs"), &config).unwrap();
    commands::execute(&add("Fix bug", ""), &config).unwrap();
    commands::execute(&add("Write tests", ""), &config).unwrap();
    commands::execute(&Command::Complete { id: 3 }, &config).unwrap();

    let lines = commands::execute(&Command::List, &config).unwrap();
    assert_eq!(
        lines,
        vec![
            "[ ] 1: Buy groceries - Milk, bread, eggs",
            "[ ] 2: Fix bug - ",
            "[✓] 3: Write tests - ",
        ]
    );
}
