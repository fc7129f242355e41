use crate::domain::errors::StoreError;
use crate::domain::keys::Table;
use crate::ports::outbound::{KvStore, WriteOp};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory implementation of KvStore for testing and embedding
pub struct InMemoryKvStore {
    entries: RwLock<BTreeMap<(Table, Vec<u8>), Vec<u8>>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored entries across all tables.
    pub fn len(&self) -> Result<usize, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|n| n == 0)
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(&(table, key.to_vec())).cloned())
    }

    fn scan(&self, table: Table, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;

        let found = entries
            .range((table, prefix.to_vec())..)
            .take_while(|((t, key), _)| *t == table && key.starts_with(prefix))
            .map(|((_, key), value)| (key.clone(), value.clone()))
            .collect();

        Ok(found)
    }

    fn apply(&self, batch: Vec<WriteOp>) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        for op in batch {
            match op {
                WriteOp::Put { table, key, value } => {
                    entries.insert((table, key), value);
                }
                WriteOp::Delete { table, key } => {
                    entries.remove(&(table, key));
                }
            }
        }
        Ok(())
    }
}
