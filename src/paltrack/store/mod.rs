//! # Storage Layer
//!
//! [`PalletStore`] is the in-memory table the whole application operates
//! on: an insertion-ordered mapping from pallet number to record. The
//! running process owns it exclusively; there is no locking because there
//! are no concurrent writers in this design.
//!
//! Persistence is a separate concern: [`csv::CsvGateway`] loads and saves
//! the whole table to the canonical file. Every mutation batch triggers a
//! full-table save, not an incremental diff — the table is small and the
//! file is the unit of durability.
//!
//! Records are never physically removed. Discarding a pallet sets its
//! status; the row stays so the history remains visible.

use crate::model::PalletRecord;
use log::warn;
use std::collections::HashMap;

pub mod csv;

/// Insertion-ordered table of pallet records, indexed by id.
#[derive(Debug, Default, Clone)]
pub struct PalletStore {
    records: Vec<PalletRecord>,
    by_id: HashMap<String, usize>,
}

impl PalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a record sequence, keeping the first occurrence
    /// of any duplicated id.
    pub fn from_records(records: Vec<PalletRecord>) -> Self {
        let mut store = Self::new();
        for rec in records {
            if !store.insert(rec.clone()) {
                warn!("dropping duplicate pallet id {}", rec.id);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&PalletRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PalletRecord> {
        match self.by_id.get(id) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    /// Insert a new record. Returns false (and leaves the store untouched)
    /// if the id already exists; existing records are never overwritten
    /// through this path.
    pub fn insert(&mut self, record: PalletRecord) -> bool {
        if self.by_id.contains_key(&record.id) {
            return false;
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[PalletRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PalletRecord> {
        self.records.iter()
    }
}
