//! Infrastructure layer: filesystem persistence for the inventory store.

pub mod snapshot;

pub use snapshot::{DEFAULT_INVENTORY_PATH, JsonFileSnapshotStore, parse_snapshot};
