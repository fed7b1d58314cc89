//! Validated item identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Name of an inventory item.
///
/// Always non-empty and trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Validate and trim a raw item name.
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InventoryError::invalid_argument(
                "item must be a non-empty string",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name: ItemName = "  apple \t".parse().unwrap();
        assert_eq!(name.as_str(), "apple");
    }

    #[test]
    fn rejects_blank_names() {
        for raw in ["", "   ", "\n\t"] {
            let err = ItemName::parse(raw).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidArgument(_)), "{raw:?}");
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: ItemName = serde_json::from_str("\" pear \"").unwrap();
        assert_eq!(ok.as_str(), "pear");
        assert!(serde_json::from_str::<ItemName>("\"  \"").is_err());
    }
}
