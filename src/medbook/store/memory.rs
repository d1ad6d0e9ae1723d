use super::SnapshotStore;
use crate::error::Result;
use crate::model::Records;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the instance itself.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Records,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-seeded snapshot, as if a previous session had
    /// persisted `records`.
    pub fn with_records(records: Records) -> Self {
        Self { records }
    }

    /// The snapshot as of the last save. Lets tests assert what a refused
    /// operation did (or did not) persist.
    pub fn saved(&self) -> &Records {
        &self.records
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&mut self, records: &Records) -> Result<()> {
        self.records = records.clone();
        Ok(())
    }

    fn load(&self) -> Result<Records> {
        Ok(self.records.clone())
    }
}
