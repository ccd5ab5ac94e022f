use chrono::Utc;
use uuid::Uuid;

use super::TransferRecord;
use crate::Result;

/// A store of transfer records, keyed by their id.
pub trait Repository {
    /// Stores a new record.
    ///
    /// A nil id is replaced by a fresh random one and an empty creation timestamp by the
    /// current time.
    ///
    /// # Returns
    /// The id the record was stored under.
    ///
    /// # Errors
    /// `AnnErr::DuplicateRecord` if a record with the same id is already stored, or any error
    /// produced by the underlying storage.
    fn create(&mut self, record: TransferRecord) -> Result<Uuid>;

    /// Fetches the record stored under `id`.
    ///
    /// # Errors
    /// `AnnErr::RecordNotFound` if there is none.
    fn read(&self, id: Uuid) -> Result<TransferRecord>;

    /// Replaces the record stored under `record.id`, an empty creation timestamp keeps the
    /// stored one.
    ///
    /// # Errors
    /// `AnnErr::RecordNotFound` if there is none.
    fn update(&mut self, record: TransferRecord) -> Result<()>;

    /// Removes the record stored under `id`.
    ///
    /// # Errors
    /// `AnnErr::RecordNotFound` if there is none.
    fn delete(&mut self, id: Uuid) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for &mut R {
    fn create(&mut self, record: TransferRecord) -> Result<Uuid> {
        (**self).create(record)
    }

    fn read(&self, id: Uuid) -> Result<TransferRecord> {
        (**self).read(id)
    }

    fn update(&mut self, record: TransferRecord) -> Result<()> {
        (**self).update(record)
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        (**self).delete(id)
    }
}

/// Fills in the id and creation timestamp of a record about to be created.
pub(super) fn stamp(mut record: TransferRecord) -> TransferRecord {
    if record.id.is_nil() {
        record.id = Uuid::new_v4();
    }
    if record.created_at.is_empty() {
        record.created_at = Utc::now().to_rfc3339();
    }

    record
}
