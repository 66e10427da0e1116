//! The in-memory record collection.

use std::collections::BTreeMap;

use celldex_model::{RawRow, Record, RecordId};
use celldex_normalize::normalize_row;

use crate::error::StoreError;

/// Ordered, append-only collection of normalized records.
///
/// Identifiers are assigned in strictly increasing order starting at 0 and
/// never reused, so a deleted id stays dangling forever. Stored records are
/// immutable; every query hands out read-only borrows.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: BTreeMap<RecordId, Record>,
    next_id: u32,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and append every row in order, returning how many rows
    /// were processed.
    pub fn ingest(&mut self, rows: impl IntoIterator<Item = RawRow>) -> usize {
        let mut appended = 0;
        for row in rows {
            self.add(&row);
            appended += 1;
        }
        appended
    }

    /// Normalize one raw row and append it under a fresh identifier.
    pub fn add(&mut self, row: &RawRow) -> RecordId {
        self.insert_record(normalize_row(row))
    }

    /// Append an already-normalized record under a fresh identifier.
    pub fn insert_record(&mut self, record: Record) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.records.insert(id, record);
        id
    }

    /// Look up a record by identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when the identifier was never assigned or
    /// its record has been deleted.
    pub fn get(&self, id: RecordId) -> Result<&Record, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Remove a record. Returns whether anything was removed; deleting a
    /// missing identifier is an outcome, not an error.
    pub fn delete(&mut self, id: RecordId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All live records in ascending identifier order. This is the
    /// canonical iteration order every query builds on.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Records bucketed by manufacturer, absent manufacturers grouped under
    /// `None`. Buckets are keyed verbatim and ordered with the absent
    /// bucket first, then lexicographic.
    pub fn group_by_oem(&self) -> BTreeMap<Option<&str>, Vec<(RecordId, &Record)>> {
        let mut groups: BTreeMap<Option<&str>, Vec<(RecordId, &Record)>> = BTreeMap::new();
        for (id, record) in self.iter() {
            groups.entry(record.oem.as_deref()).or_default().push((id, record));
        }
        groups
    }

    /// Records in ascending body-weight order. Zero-weight records carry
    /// no weight data and are excluded; ties keep insertion order.
    pub fn sorted_by_weight(&self) -> Vec<(RecordId, &Record)> {
        let mut weighed: Vec<(RecordId, &Record)> = self
            .iter()
            .filter(|(_, record)| record.body_weight > 0.0)
            .collect();
        weighed.sort_by(|a, b| a.1.body_weight.total_cmp(&b.1.body_weight));
        weighed
    }
}
