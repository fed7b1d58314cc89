use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use stockroom_core::{IntoQuantity, PersistenceError};
use stockroom_inventory::{Snapshot, SnapshotStore};

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// JSON file persistence for the inventory mapping.
///
/// The file holds a single object mapping item names to integer quantities,
/// pretty-printed with 2-space indentation. Writes go straight to the target
/// path; a crash mid-write can leave a truncated file, which the next load
/// reports as corrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn read_snapshot(&self) -> Result<Snapshot, PersistenceError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "inventory file not found");
                return Ok(Snapshot::Missing);
            }
            Err(err) => return Err(PersistenceError::io(&self.path, err)),
        };

        let snapshot = parse_snapshot(&bytes);
        if let Snapshot::Corrupt(reason) = &snapshot {
            tracing::debug!(path = %self.path.display(), %reason, "inventory file is corrupt");
        }
        Ok(snapshot)
    }

    fn write_snapshot(&self, items: &BTreeMap<String, i64>) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, json).map_err(|err| PersistenceError::io(&self.path, err))?;
        tracing::debug!(path = %self.path.display(), items = items.len(), "inventory file written");
        Ok(())
    }
}

/// Interpret raw file contents as an inventory snapshot.
///
/// Values are coerced to integers (`"3"` and `3.0` both become `3`); anything
/// that is not a JSON object of coercible values is reported as corrupt.
pub fn parse_snapshot(bytes: &[u8]) -> Snapshot {
    let document: JsonValue = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(err) => return Snapshot::Corrupt(format!("invalid JSON: {err}")),
    };

    let JsonValue::Object(entries) = document else {
        return Snapshot::Corrupt("expected a JSON object of item quantities".to_string());
    };

    let mut items = BTreeMap::new();
    for (item, value) in entries {
        match (&value).into_quantity() {
            Ok(qty) => {
                items.insert(item, qty.value());
            }
            Err(err) => return Snapshot::Corrupt(format!("item {item:?}: {err}")),
        }
    }
    Snapshot::Items(items)
}
