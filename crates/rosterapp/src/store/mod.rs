//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`DataStore`]
//! trait allows the command layer to work with different backends.
//!
//! ## Model
//!
//! The backing store is a single flat file holding the whole collection, one
//! record per line. There is no index and no partial update: every mutation
//! is a full load-modify-save cycle. Record counts are assumed small enough
//! that rewriting the file on every write is acceptable.
//!
//! ## Atomicity
//!
//! `save` must be atomic: the collection is written to a temporary file in
//! the same directory and renamed over the backing file, so a reader never
//! observes a partially written file. This protects against torn writes
//! only. There is no locking, so concurrent writers can still lose updates;
//! the store assumes a single process and a single user.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, owns the backing file path.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Load the full collection, creating the backing store empty if absent.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the full collection, atomically.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
