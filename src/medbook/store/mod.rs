//! # Storage Layer
//!
//! This module defines the snapshot persistence abstraction. The
//! [`SnapshotStore`] trait lets the clinic work with different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - `doctors.json`, `patients.json`, `appointments.json` under one root
//!   - Each file is a pretty-printed JSON array of records
//!   - Saves stage the whole trio to hidden `.tmp` files before renaming
//!     over the live ones
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Snapshot model
//!
//! There is no partial update and no append log: every save rewrites the
//! complete collections, and a load reads whatever trio is present (missing
//! files count as empty collections). Counter reconciliation and referential
//! concerns belong to the clinic, not the backend.

use crate::error::Result;
use crate::model::Records;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-state snapshot persistence.
pub trait SnapshotStore {
    /// Overwrite the persisted state with a full snapshot of `records`.
    fn save(&mut self, records: &Records) -> Result<()>;

    /// Restore the persisted state. Absent blobs yield empty collections;
    /// unreadable or unparseable blobs are an error.
    fn load(&self) -> Result<Records>;
}
