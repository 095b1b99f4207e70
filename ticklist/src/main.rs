//! `Ticklist` -- file-backed personal task list for the terminal.
//!
//! Tasks live in a single pretty-printed JSON file. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/ticklist/config.toml`).
//!
//! # Usage
//!
//! ```bash
//! # Add a task to the default tasks file
//! cargo run --bin ticklist -- add "Buy groceries" --desc "Milk, bread, eggs"
//!
//! # List tasks, mark one done
//! cargo run --bin ticklist -- list
//! cargo run --bin ticklist -- complete 1
//!
//! # Point at an explicit file (also: TICKLIST_FILE env var)
//! cargo run --bin ticklist -- --file /tmp/tasks.json list
//! ```

use clap::Parser;
use ticklist::commands;
use ticklist::config::{CliArgs, Config};

fn main() {
    let cli = CliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Logs go to stderr; stdout carries only command output.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(file = %config.tasks_file.display(), "using tasks file");

    if let Err(e) = commands::run(&cli.command, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
