//! `stockroom-core`: inventory foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error taxonomy,
//! validated item identifiers and quantity coercion.

pub mod error;
pub mod id;
pub mod quantity;

pub use error::{InventoryError, InventoryResult, PersistenceError};
pub use id::ItemName;
pub use quantity::{IntoQuantity, Quantity};
