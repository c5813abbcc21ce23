//! Equipment storage

use std::collections::BTreeMap;

use crate::models::equipment::{EquipmentId, EquipmentRecord};

/// Keyed storage for equipment records.
///
/// Stores are plain mappings: they hold no lifecycle rules and never allocate
/// ids. Reads hand out owned copies.
#[cfg_attr(test, mockall::automock)]
pub trait EquipmentStore: Send {
    /// Fetch a copy of the record with the given id
    fn get(&self, id: EquipmentId) -> Option<EquipmentRecord>;

    /// Insert or overwrite the record stored under `record.id`
    fn put(&mut self, record: EquipmentRecord);

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory equipment store
#[derive(Debug, Default)]
pub struct InMemoryEquipmentStore {
    records: BTreeMap<EquipmentId, EquipmentRecord>,
}

impl EquipmentStore for InMemoryEquipmentStore {
    fn get(&self, id: EquipmentId) -> Option<EquipmentRecord> {
        self.records.get(&id).cloned()
    }

    fn put(&mut self, record: EquipmentRecord) {
        self.records.insert(record.id, record);
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
