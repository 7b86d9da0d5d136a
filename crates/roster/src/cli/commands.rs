//! # CLI Layer
//!
//! This module is one possible UI client for roster. It is the only place in
//! the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Resolves configuration into a concrete store
//!
//! Dispatch is a plain match over the parsed subcommand; each arm calls the
//! API facade and hands the structured result to `print`.

use super::print;
use super::setup::{Cli, Commands};
use clap::Parser;
use log::debug;
use rosterapp::commands::get::EmployeeFilter;
use rosterapp::config::RosterConfig;
use rosterapp::error::Result;
use rosterapp::store::fs::FileStore;
use rosterapp::RosterApi;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RosterConfig::load();
    let data_file: PathBuf = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_file());
    debug!("using data file {}", data_file.display());

    let mut api = RosterApi::new(FileStore::new(&data_file));

    match cli.command {
        Commands::List => {
            let result = api.list()?;
            print::print_employees(&result.listed, cli.output);
        }
        Commands::Add {
            id,
            name,
            department,
            role,
        } => {
            let result = api.add(&id, &name, &department, &role)?;
            print::print_messages(&result.messages);
        }
        Commands::Update {
            id,
            new_id,
            name,
            department,
            role,
        } => {
            // Omitted flags keep the current field values; the library's
            // update is always a full-record replace.
            let current = api.get(&id)?;
            let result = api.update(
                &id,
                new_id.as_deref().unwrap_or(&current.id),
                name.as_deref().unwrap_or(&current.name),
                department.as_deref().unwrap_or(&current.department),
                role.as_deref().unwrap_or(&current.role),
            )?;
            print::print_messages(&result.messages);
        }
        Commands::Delete { id } => {
            let result = api.delete(&id)?;
            print::print_messages(&result.messages);
        }
        Commands::Search {
            id,
            name,
            department,
            role,
        } => {
            let filter = EmployeeFilter {
                id,
                name,
                department,
                role,
            };
            let result = api.search(&filter)?;
            print::print_employees(&result.listed, cli.output);
        }
        Commands::Path => {
            println!("{}", data_file.display());
        }
        Commands::Departments => {
            for department in config.departments() {
                println!("{}", department);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // RUST_LOG overrides the flag when set.
    if let Ok(logger) = flexi_logger::Logger::try_with_env_or_str(level) {
        if let Ok(handle) = logger.log_to_stderr().start() {
            // Keep the logger alive for the rest of the process.
            std::mem::forget(handle);
        }
    }
}
