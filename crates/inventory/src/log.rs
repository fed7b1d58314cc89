use chrono::{DateTime, Utc};

/// Record of a successful `add_item`, handed back to the caller.
///
/// The store keeps no history; callers append these wherever they want one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLogEntry {
    pub at: DateTime<Utc>,
    pub item: String,
    pub quantity: i64,
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.quantity, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_timestamp_quantity_and_item() {
        let entry = StockLogEntry {
            at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            item: "apple".to_string(),
            quantity: 10,
        };
        assert_eq!(entry.to_string(), "2024-03-01 12:30:00 UTC: Added 10 of apple");
    }
}
