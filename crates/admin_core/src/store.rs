use std::collections::HashSet;

use shared::domain::{Record, RecordId};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection. Later duplicates of an id are dropped so
    /// ids stay unique; the number of dropped entries is returned.
    pub fn load(&mut self, records: Vec<Record>) -> usize {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        let mut dropped = 0;

        for record in records {
            if seen.insert(record.id.clone()) {
                kept.push(record);
            } else {
                warn!(record_id = %record.id, "store: dropping duplicate record id");
                dropped += 1;
            }
        }

        self.records = kept;
        dropped
    }

    pub fn delete_one(&mut self, id: &RecordId) -> Option<Record> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Removes every record whose id is in `ids`, returning the removed ids in
    /// store order.
    pub fn delete_many(&mut self, ids: &HashSet<RecordId>) -> Vec<RecordId> {
        let mut removed = Vec::new();
        self.records.retain(|record| {
            if ids.contains(&record.id) {
                removed.push(record.id.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Replaces the record stored under `id`. The stored id is kept even if
    /// `new_values` carries a different one. Returns false when `id` is gone.
    pub fn update_one(&mut self, id: &RecordId, new_values: Record) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.records[index] = Record {
            id: id.clone(),
            ..new_values
        };
        true
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
