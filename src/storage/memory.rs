use std::{
    collections::{HashMap, hash_map::Entry},
    mem,
};

use uuid::Uuid;

use super::{Repository, TransferRecord, repository::stamp};
use crate::{AnnErr, Result};

/// A repository that keeps its records in memory for as long as it lives.
#[derive(Debug, Default, Clone)]
pub struct MemoryRepository {
    records: HashMap<Uuid, TransferRecord>,
}

impl MemoryRepository {
    /// Creates a new empty `MemoryRepository`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Repository for MemoryRepository {
    fn create(&mut self, record: TransferRecord) -> Result<Uuid> {
        let record = stamp(record);
        let id = record.id;

        match self.records.entry(id) {
            Entry::Occupied(_) => Err(AnnErr::DuplicateRecord(id)),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(id)
            }
        }
    }

    fn read(&self, id: Uuid) -> Result<TransferRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(AnnErr::RecordNotFound(id))
    }

    fn update(&mut self, mut record: TransferRecord) -> Result<()> {
        let stored = self
            .records
            .get_mut(&record.id)
            .ok_or(AnnErr::RecordNotFound(record.id))?;

        if record.created_at.is_empty() {
            record.created_at = mem::take(&mut stored.created_at);
        }

        *stored = record;
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(AnnErr::RecordNotFound(id))
    }
}
