//! Repository layer for equipment storage

pub mod equipment;

pub use equipment::{EquipmentStore, InMemoryEquipmentStore};

/// Main repository struct holding the backing stores
pub struct Repository {
    pub equipment: Box<dyn EquipmentStore>,
}

impl Repository {
    /// Create a repository over the given equipment store
    pub fn new(equipment: Box<dyn EquipmentStore>) -> Self {
        Self { equipment }
    }

    /// Create a repository backed by process memory
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryEquipmentStore::default()))
    }
}
