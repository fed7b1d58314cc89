//! Persistence seam for the inventory mapping.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use stockroom_core::PersistenceError;

/// What a [`SnapshotStore`] found when asked for the persisted mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Nothing has been persisted yet.
    Missing,
    /// Something was persisted but it could not be interpreted as a mapping.
    Corrupt(String),
    Items(BTreeMap<String, i64>),
}

/// Result of [`InventoryStore::load`](crate::InventoryStore::load).
///
/// In every case the in-memory mapping has been replaced; `Missing` and
/// `Corrupt` leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { items: usize },
    Missing,
    Corrupt { reason: String },
}

/// Durable home for the inventory mapping.
pub trait SnapshotStore {
    /// Read the persisted mapping.
    ///
    /// A missing or undecodable snapshot is reported through [`Snapshot`];
    /// `Err` is reserved for storage that could not be read at all.
    fn read_snapshot(&self) -> Result<Snapshot, PersistenceError>;

    /// Replace the persisted mapping with `items`.
    fn write_snapshot(&self, items: &BTreeMap<String, i64>) -> Result<(), PersistenceError>;
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Snapshot>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Snapshot::Missing),
        }
    }

    pub fn with_items(items: BTreeMap<String, i64>) -> Self {
        Self {
            inner: RwLock::new(Snapshot::Items(items)),
        }
    }

    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Snapshot::Corrupt(reason.into())),
        }
    }

    /// Current contents, as the next `read_snapshot` would return them.
    pub fn snapshot(&self) -> Snapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read_snapshot(&self) -> Result<Snapshot, PersistenceError> {
        Ok(self.snapshot())
    }

    fn write_snapshot(&self, items: &BTreeMap<String, i64>) -> Result<(), PersistenceError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Snapshot::Items(items.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_missing_and_keeps_the_last_write() {
        let store = InMemorySnapshotStore::new();
        assert_eq!(store.read_snapshot().unwrap(), Snapshot::Missing);

        let items = BTreeMap::from([("apple".to_string(), 3)]);
        store.write_snapshot(&items).unwrap();
        assert_eq!(store.read_snapshot().unwrap(), Snapshot::Items(items));
    }

    #[test]
    fn writing_repairs_a_corrupt_snapshot() {
        let store = InMemorySnapshotStore::corrupt("garbage");
        store.write_snapshot(&BTreeMap::new()).unwrap();
        assert_eq!(store.snapshot(), Snapshot::Items(BTreeMap::new()));
    }
}
