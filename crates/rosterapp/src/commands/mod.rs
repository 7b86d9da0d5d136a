//! # Command Layer
//!
//! This module contains the core business logic of roster. Each operation
//! lives in its own submodule and implements pure functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Perform the full load-modify-atomic-save cycle for each mutation
//! - Enforce the collection invariant: at most one record per id
//! - Return structured [`CmdResult`] values with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, or exit codes
//! - **Argument parsing**: that's the CLI layer's job
//! - **Input normalization**: the API facade trims and title-cases input
//!   before it reaches a command
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) to avoid
//! filesystem dependencies and cover all logic branches, including failed
//! saves leaving the store unchanged.
//!
//! ## Command Modules
//!
//! - [`add`]: Append a new record, rejecting duplicate ids
//! - [`update`]: Replace a record in place, id changes subject to uniqueness
//! - [`delete`]: Remove a record by id
//! - [`get`]: List records through a linear-scan filter
//! - [`helpers`]: Shared id lookup utilities

use crate::model::Employee;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod update;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, employees: Vec<Employee>) -> Self {
        self.affected = employees;
        self
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }
}
