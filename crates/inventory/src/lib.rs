//! Inventory store.
//!
//! This crate owns the item -> quantity mapping and its business rules,
//! implemented as plain in-memory logic. Persistence goes through the
//! [`SnapshotStore`] seam so the store itself never touches the filesystem.

pub mod log;
pub mod policy;
pub mod report;
pub mod snapshot;
pub mod store;

pub use log::StockLogEntry;
pub use policy::ZeroStockPolicy;
pub use report::InventoryReport;
pub use snapshot::{InMemorySnapshotStore, LoadOutcome, Snapshot, SnapshotStore};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
