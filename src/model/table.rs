//! Table types.

use crate::flatten::FlatEntry;
use serde::{Deserialize, Serialize};

/// Header label of the key column.
pub const HEADER_KEY: &str = "Key";

/// Header label of the value column.
pub const HEADER_VALUE: &str = "Value";

/// One row of the two-column Key/Value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularRow {
    /// Key column text
    pub key: String,

    /// Value column text
    pub value: String,
}

impl TabularRow {
    /// Create a new row.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The `Key | Value` header row.
    pub fn header() -> Self {
        Self::new(HEADER_KEY, HEADER_VALUE)
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 2] {
        [&self.key, &self.value]
    }
}

impl From<FlatEntry> for TabularRow {
    fn from(entry: FlatEntry) -> Self {
        Self::new(entry.path, entry.value)
    }
}

/// Build the full table for a list of flattened entries: the header row
/// followed by one row per entry.
pub fn rows_from_entries(entries: Vec<FlatEntry>) -> Vec<TabularRow> {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(TabularRow::header());
    rows.extend(entries.into_iter().map(TabularRow::from));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_from_entries_prepends_header() {
        let entries = vec![
            FlatEntry::new("name", "DocuBridge Test"),
            FlatEntry::new("features.0", "A"),
            FlatEntry::new("features.1", "B"),
        ];
        let rows = rows_from_entries(entries);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], TabularRow::header());
        assert_eq!(rows[1].cells(), ["name", "DocuBridge Test"]);
        assert_eq!(rows[3].cells(), ["features.1", "B"]);
    }

    #[test]
    fn test_rows_from_no_entries() {
        let rows = rows_from_entries(Vec::new());
        assert_eq!(rows, vec![TabularRow::header()]);
    }
}
