//! Link table and hit testing.

use crate::indexer;
use crate::scanner::Scanner;
use crate::types::LinkRecord;

/// All link records for one buffer generation, in discovery order.
/// Owned by a single pane and replaced wholesale on every re-index.
#[derive(Debug, Default, Clone)]
pub struct LinkTable {
    /// Records for the current buffer text.
    records: Vec<LinkRecord>,
}

impl LinkTable {
    /// An empty table, as held by a freshly constructed pane.
    pub const fn new() -> Self {
        return Self { records: Vec::new() };
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        return self.records.len();
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[LinkRecord] {
        return &self.records;
    }

    /// Re-scan `text` and publish the new generation.
    /// The old records stay queryable until the new set is complete.
    pub fn rebuild(&mut self, scanner: &Scanner, text: &str) {
        let patterns = scanner.scan(text);
        let records = indexer::index(text, &patterns);
        self.replace(records);
    }

    /// Publish a fully built generation, discarding the previous one.
    pub fn replace(&mut self, records: Vec<LinkRecord>) {
        self.records = records;
    }
}

/// First record whose range contains `offset`, both ends inclusive.
pub fn find_link_at(table: &LinkTable, offset: usize) -> Option<&LinkRecord> {
    return table.records.iter().find(|r| return r.hit_range().contains(&offset));
}
