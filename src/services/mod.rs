//! Business logic services

pub mod clock;
pub mod equipment;
pub mod registry;

pub use clock::{Clock, SystemClock};
pub use equipment::EquipmentService;
pub use registry::EquipmentRegistry;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: EquipmentService,
}

impl Services {
    /// Create all services with the given repository and time source
    pub fn new(repository: Repository, clock: Box<dyn Clock>) -> Self {
        Self {
            equipment: EquipmentService::new(EquipmentRegistry::new(repository, clock)),
        }
    }
}
