use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use stockroom_core::{InventoryError, InventoryResult, IntoQuantity, ItemName, Quantity};

use crate::log::StockLogEntry;
use crate::policy::ZeroStockPolicy;
use crate::report::InventoryReport;
use crate::snapshot::{LoadOutcome, Snapshot, SnapshotStore};

/// Threshold used by [`InventoryStore::list_low_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory mapping from item name to quantity.
///
/// The store is a plain owned value; nothing is persisted until the caller
/// invokes [`save`](Self::save).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryStore {
    items: BTreeMap<String, i64>,
    policy: ZeroStockPolicy,
}

impl InventoryStore {
    /// Create an empty store with the default [`ZeroStockPolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ZeroStockPolicy) -> Self {
        Self {
            items: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ZeroStockPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item.trim())
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Add `quantity` of `item`, creating the entry if needed.
    ///
    /// The returned log entry is stamped with the current time.
    pub fn add_item(
        &mut self,
        item: &str,
        quantity: impl IntoQuantity,
    ) -> InventoryResult<StockLogEntry> {
        self.add_item_at(item, quantity, Utc::now())
    }

    /// Same as [`add_item`](Self::add_item) with an explicit timestamp.
    pub fn add_item_at(
        &mut self,
        item: &str,
        quantity: impl IntoQuantity,
        at: DateTime<Utc>,
    ) -> InventoryResult<StockLogEntry> {
        let name = ItemName::parse(item)?;
        let delta = quantity.into_quantity()?;

        let current = Quantity::new(self.items.get(name.as_str()).copied().unwrap_or(0));
        let next = current.checked_add(delta)?;

        if next.is_depleted() && self.policy.prunes_on_add() {
            self.items.remove(name.as_str());
            tracing::debug!(item = %name, delta = %delta, "item depleted on add; pruned");
        } else {
            self.items.insert(name.as_str().to_string(), next.value());
            tracing::debug!(item = %name, delta = %delta, quantity = %next, "item added");
        }

        Ok(StockLogEntry {
            at,
            item: name.into_inner(),
            quantity: delta.value(),
        })
    }

    /// Take `quantity` of `item` out of stock.
    ///
    /// Unknown items are ignored whatever `quantity` holds. An entry that ends
    /// at zero or below is removed entirely.
    pub fn remove_item(&mut self, item: &str, quantity: impl IntoQuantity) -> InventoryResult<()> {
        let key = item.trim();
        let Some(current) = self.items.get(key).copied() else {
            tracing::debug!(item = %key, "remove for unknown item ignored");
            return Ok(());
        };

        let delta = quantity.into_quantity().map_err(|_| {
            InventoryError::invalid_argument("Invalid types passed to remove_item(item, qty)")
        })?;

        let next = Quantity::new(current).checked_sub(delta)?;
        if next.is_depleted() {
            self.items.remove(key);
            tracing::debug!(item = %key, delta = %delta, "item depleted; removed");
        } else {
            self.items.insert(key.to_string(), next.value());
            tracing::debug!(item = %key, delta = %delta, quantity = %next, "item removed");
        }
        Ok(())
    }

    /// Current quantity of `item`.
    pub fn get_qty(&self, item: &str) -> InventoryResult<i64> {
        let key = item.trim();
        self.items
            .get(key)
            .copied()
            .ok_or_else(|| InventoryError::not_found(key))
    }

    /// Replace the mapping with whatever `source` holds.
    ///
    /// Keys are trimmed on the way in; a blank key, or two keys that trim to
    /// the same name, make the snapshot corrupt. A missing or corrupt snapshot
    /// empties the store and is reported through the returned [`LoadOutcome`].
    /// On `Err` the store is left untouched.
    pub fn load<S>(&mut self, source: &S) -> InventoryResult<LoadOutcome>
    where
        S: SnapshotStore + ?Sized,
    {
        let snapshot = match source.read_snapshot()? {
            Snapshot::Items(items) => normalize_keys(items),
            other => other,
        };

        let outcome = match snapshot {
            Snapshot::Items(items) => {
                let count = items.len();
                self.items = items;
                tracing::info!(items = count, "inventory loaded");
                LoadOutcome::Loaded { items: count }
            }
            Snapshot::Missing => {
                self.items.clear();
                tracing::warn!("no saved inventory found; starting empty");
                LoadOutcome::Missing
            }
            Snapshot::Corrupt(reason) => {
                self.items.clear();
                tracing::warn!(%reason, "saved inventory unreadable; starting empty");
                LoadOutcome::Corrupt { reason }
            }
        };
        Ok(outcome)
    }

    /// Persist the current mapping to `sink`.
    pub fn save<S>(&self, sink: &S) -> InventoryResult<()>
    where
        S: SnapshotStore + ?Sized,
    {
        sink.write_snapshot(&self.items)?;
        tracing::info!(items = self.items.len(), "inventory saved");
        Ok(())
    }

    pub fn report(&self) -> InventoryReport {
        InventoryReport::new(
            self.items
                .iter()
                .map(|(item, qty)| (item.clone(), *qty))
                .collect(),
        )
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn list_low(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn list_low_default(&self) -> Vec<String> {
        self.list_low(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

/// Re-key a loaded mapping by trimmed item name.
fn normalize_keys(items: BTreeMap<String, i64>) -> Snapshot {
    let mut normalized = BTreeMap::new();
    for (raw, qty) in items {
        let Ok(name) = ItemName::parse(&raw) else {
            return Snapshot::Corrupt(format!("blank item name {raw:?}"));
        };
        if normalized.insert(name.into_inner(), qty).is_some() {
            return Snapshot::Corrupt(format!("duplicate item name {raw:?}"));
        }
    }
    Snapshot::Items(normalized)
}
