//! Configuration system for the `Ticklist` CLI.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/ticklist/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageFileConfig,
    log: LogFileConfig,
}

/// `[storage]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    tasks_file: Option<PathBuf>,
}

/// `[log]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LogFileConfig {
    level: Option<String>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the `Ticklist` binary.
#[derive(clap::Parser, Debug)]
#[command(name = "ticklist", version, about = "File-backed personal task list")]
pub struct CliArgs {
    /// The operation to perform.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the tasks file (default: `<data dir>/ticklist/tasks.json`).
    #[arg(short, long, env = "TICKLIST_FILE")]
    pub file: Option<PathBuf>,

    /// Path to config file (default: `~/.config/ticklist/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TICKLIST_LOG")]
    pub log_level: Option<String>,
}

/// The three operations of the task list.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task title.
        title: String,
        /// Task description.
        #[arg(short, long, default_value = "")]
        desc: String,
    },
    /// List all tasks.
    List,
    /// Mark a task complete.
    Complete {
        /// ID of the task to mark complete.
        id: u64,
    },
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved `Ticklist` configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the task list.
    pub tasks_file: PathBuf,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `Config` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            tasks_file: cli
                .file
                .clone()
                .or_else(|| file.storage.tasks_file.clone())
                .unwrap_or(defaults.tasks_file),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| file.log.level.clone())
                .unwrap_or(defaults.log_level),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Default tasks file location: the platform data directory, falling back
/// to the current directory when none can be determined.
fn default_tasks_file() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("tasks.json"),
        |dir| dir.join("ticklist").join("tasks.json"),
    )
}

/// Load and parse a TOML config file.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("ticklist").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
