//! Data models for the equipment registry

pub mod enums;
pub mod equipment;

// Re-export commonly used types
pub use enums::EquipmentStatus;
pub use equipment::{EquipmentId, EquipmentRecord, NewEquipment};
