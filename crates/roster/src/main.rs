//! # Roster CLI
//!
//! Roster ships with a thin CLI client: the CLI lives in `src/cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + store wiring (commands.rs)           │
//! │  - Terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/rosterapp)                                 │
//! │  - API facade, command modules, storage                     │
//! │  - Never assumes terminal I/O                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI layer is responsible for all user-facing concerns: argument
//! parsing, config resolution, dispatch, error reporting, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
