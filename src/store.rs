use crate::errors::StoreResult;
use crate::record::{PlayerRecord, RecordId};
use std::collections::HashMap;
use std::path::Path;

/// The record-store collaborator: load/save of persistent character records
/// by stable identifier. The engine never initiates I/O of its own; a host
/// implementation may be backed by anything that honors this contract.
pub trait RecordStore {
    /// Load a record by identifier, or `None` if no such character exists.
    fn load(&self, id: &str) -> Option<PlayerRecord>;

    /// Persist a record, replacing any prior version.
    fn save(&mut self, record: &PlayerRecord);
}

/// In-memory record store. This is the reference implementation used in
/// tests and single-process hosts; `to_json`/`from_json` let a host persist
/// the whole store between sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<RecordId, PlayerRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: HashMap::new(),
        }
    }

    pub fn insert(&mut self, record: PlayerRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize every record to a JSON snapshot.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Rebuild a store from a JSON snapshot produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(MemoryStore {
            records: serde_json::from_str(json)?,
        })
    }

    /// Write the JSON snapshot to a file.
    pub fn save_file(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a store snapshot from a file.
    pub fn load_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, id: &str) -> Option<PlayerRecord> {
        self.records.get(id).cloned()
    }

    fn save(&mut self, record: &PlayerRecord) {
        self.records.insert(record.id.clone(), record.clone());
    }
}
