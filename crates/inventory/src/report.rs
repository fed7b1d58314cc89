/// Human-readable listing of every item and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryReport {
    entries: Vec<(String, i64)>,
}

impl InventoryReport {
    pub const HEADER: &'static str = "Items Report";

    pub fn new(entries: Vec<(String, i64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(Self::HEADER)?;
        for (item, qty) in &self.entries {
            write!(f, "\n{item} -> {qty}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_item_after_header() {
        let report = InventoryReport::new(vec![("apple".into(), 7), ("banana".into(), -2)]);
        assert_eq!(report.to_string(), "Items Report\napple -> 7\nbanana -> -2");
    }

    #[test]
    fn empty_report_is_just_the_header() {
        assert_eq!(InventoryReport::default().to_string(), "Items Report");
    }
}
