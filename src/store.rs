//! Storage collaborator.
//!
//! The roster core never holds records between calls; it reads a fresh
//! snapshot from a [`PlayerStore`] for every request. Concurrency control
//! for writes to the same record belongs to the store.

use crate::error::StoreError;
use crate::player::{PlayerDraft, PlayerId, PlayerRecord};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Persistence for player records.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerStore: Send + Sync {
    /// Every stored record, in id order.
    fn find_all(&self) -> Result<Vec<PlayerRecord>, StoreError>;

    fn find_by_id(&self, id: PlayerId) -> Result<Option<PlayerRecord>, StoreError>;

    /// Persist a new player, assigning its id.
    fn insert(&self, draft: PlayerDraft) -> Result<PlayerRecord, StoreError>;

    /// Overwrite an existing record.
    fn save(&self, record: PlayerRecord) -> Result<PlayerRecord, StoreError>;

    fn delete(&self, id: PlayerId) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<PlayerId, PlayerRecord>,
    last_id: u64,
}

/// A [`PlayerStore`] backed by an in-process map.
///
/// Ids start at 1 and are never reused, even after deletion.
///
/// # Examples
///
/// ```rust
/// use zzroster::{InMemoryPlayerStore, PlayerStore};
///
/// let store = InMemoryPlayerStore::new();
/// assert!(store.find_all().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    table: RwLock<Table>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::Backend("player table lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Table>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::Backend("player table lock poisoned".into()))
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn find_all(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn insert(&self, draft: PlayerDraft) -> Result<PlayerRecord, StoreError> {
        let mut table = self.write()?;
        let id = PlayerId::new(table.last_id + 1)
            .ok_or_else(|| StoreError::Backend("player id space exhausted".into()))?;
        table.last_id = id.get();
        let record = draft.into_record(id);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    fn save(&self, record: PlayerRecord) -> Result<PlayerRecord, StoreError> {
        let mut table = self.write()?;
        if !table.rows.contains_key(&record.id) {
            return Err(StoreError::Backend(format!("no stored player with id {}", record.id)));
        }
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    fn delete(&self, id: PlayerId) -> Result<(), StoreError> {
        self.write()?.rows.remove(&id);
        Ok(())
    }
}
