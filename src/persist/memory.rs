//! In-memory store used for ephemeral sessions and tests

use super::{validate_name, KeyValueStore, StoreError};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records written so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_name(name)?;
        Ok(self.records.get(name).cloned())
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), StoreError> {
        validate_name(name)?;
        self.records.insert(name.to_string(), data.to_vec());
        Ok(())
    }
}
