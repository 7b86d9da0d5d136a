//! # Configuration
//!
//! Roster configuration is managed by [`confique`], layered in priority
//! order:
//!
//! 1. **Environment variables**: `ROSTER_DATA_FILE`, `ROSTER_DEPARTMENTS`.
//! 2. **Config file**: `roster.toml` in the OS config directory (via the
//!    `directories` crate).
//! 3. **Compiled defaults**.
//!
//! A `--data-file` flag in the CLI overrides the resolved `data_file`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/employees.txt` | Path of the backing file |
//! | `departments` | HR, IT, Finance, Sales, Engineering | Suggestion list for UI clients |

use confique::Config;
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_departments() -> Vec<String> {
    ["HR", "IT", "Finance", "Sales", "Engineering"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterConfig {
    /// Path of the backing data file. When absent, resolves under the OS
    /// data directory.
    #[config(env = "ROSTER_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Known department names, offered as suggestions by UI clients. Records
    /// may carry departments outside this list. Comma-separated when set
    /// through the environment.
    #[config(env = "ROSTER_DEPARTMENTS", parse_env = confique::env::parse::list_by_comma)]
    pub departments: Option<Vec<String>>,
}

impl RosterConfig {
    /// Load configuration from the environment and the config file, falling
    /// back to defaults if no source is readable.
    pub fn load() -> Self {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file() {
            builder = builder.file(path);
        }
        builder.load().unwrap_or_else(|e| {
            warn!("ignoring unreadable configuration: {}", e);
            Self::default()
        })
    }

    /// Get the resolved backing file path.
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }

    /// Get the department suggestions, using defaults if not configured.
    pub fn departments(&self) -> Vec<String> {
        self.departments.clone().unwrap_or_else(default_departments)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "roster", "roster")
}

fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("roster.toml"))
}

fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("employees.txt"))
        .unwrap_or_else(|| PathBuf::from("employees.txt"))
}
