/// What happens to an entry whose quantity reaches zero or below.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ZeroStockPolicy {
    /// Only `remove_item` drops depleted entries; `add_item` may leave a zero
    /// or negative quantity in place.
    #[default]
    Retain,
    /// Both `add_item` and `remove_item` drop entries that end at zero or below.
    Prune,
}

impl ZeroStockPolicy {
    /// Whether an entry left depleted by `add_item` is removed.
    pub fn prunes_on_add(self) -> bool {
        matches!(self, ZeroStockPolicy::Prune)
    }
}

impl core::fmt::Display for ZeroStockPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ZeroStockPolicy::Retain => f.write_str("retain"),
            ZeroStockPolicy::Prune => f.write_str("prune"),
        }
    }
}

impl core::str::FromStr for ZeroStockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(ZeroStockPolicy::Retain),
            "prune" => Ok(ZeroStockPolicy::Prune),
            other => Err(format!("unknown zero-stock policy: {other} (expected retain or prune)")),
        }
    }
}
