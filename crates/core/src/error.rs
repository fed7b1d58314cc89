//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An argument failed validation (bad item name, non-integer quantity, overflow).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested item is not held in the inventory.
    #[error("{0} not in inventory")]
    NotFound(String),

    /// Persisting or reading the inventory failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}

/// Failure while writing or reading a persisted inventory snapshot.
///
/// A missing or malformed snapshot is *not* an error; see the load outcome
/// reported by the store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access inventory file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize inventory data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_item() {
        let err = InventoryError::not_found("apple");
        assert_eq!(err.to_string(), "apple not in inventory");
    }

    #[test]
    fn persistence_errors_convert_into_inventory_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InventoryError = PersistenceError::io("inventory.json", io).into();
        assert!(matches!(err, InventoryError::Persistence(PersistenceError::Io { .. })));
        assert!(err.to_string().contains("inventory.json"));
    }
}
