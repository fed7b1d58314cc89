//! Snapshot store adapters.
//!
//! Implementations of [`stockroom_inventory::SnapshotStore`] backed by real
//! storage. The in-memory variant lives next to the trait in the inventory
//! crate.

pub mod json_file;

pub use json_file::{DEFAULT_INVENTORY_PATH, JsonFileSnapshotStore, parse_snapshot};
