//! Equipment service

use std::sync::Arc;

use tokio::sync::Mutex;

use super::registry::EquipmentRegistry;
use crate::{
    error::AppResult,
    models::{
        enums::EquipmentStatus,
        equipment::{EquipmentId, EquipmentRecord, NewEquipment},
    },
};

/// Shared handle to the registry.
///
/// Every operation holds the registry lock for its whole check-then-mutate
/// sequence, so concurrent callers observe a single total order.
#[derive(Clone)]
pub struct EquipmentService {
    registry: Arc<Mutex<EquipmentRegistry>>,
}

impl EquipmentService {
    pub fn new(registry: EquipmentRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    pub async fn register(&self, data: NewEquipment, caller: &str) -> AppResult<EquipmentId> {
        let id = self.registry.lock().await.register(data, caller)?;
        tracing::info!(equipment_id = id, donor = caller, "Equipment registered");
        Ok(id)
    }

    pub async fn get_by_id(&self, id: EquipmentId) -> AppResult<EquipmentRecord> {
        self.registry.lock().await.get(id)
    }

    pub async fn update_status(
        &self,
        id: EquipmentId,
        status: EquipmentStatus,
        caller: &str,
    ) -> AppResult<()> {
        let label = status.to_string();
        let result = self.registry.lock().await.update_status(id, status, caller);
        match &result {
            Ok(()) => tracing::info!(equipment_id = id, status = %label, "Equipment status updated"),
            Err(e) => tracing::warn!(equipment_id = id, caller, "Status update rejected: {}", e),
        }
        result
    }

    pub async fn assign_recipient(
        &self,
        id: EquipmentId,
        recipient: String,
        caller: &str,
    ) -> AppResult<()> {
        let result = self
            .registry
            .lock()
            .await
            .assign_recipient(id, recipient.clone(), caller);
        match &result {
            Ok(()) => tracing::info!(equipment_id = id, recipient = %recipient, "Recipient assigned"),
            Err(e) => tracing::warn!(equipment_id = id, caller, "Recipient assignment rejected: {}", e),
        }
        result
    }

    /// Last allocated equipment id
    pub async fn last_id(&self) -> EquipmentId {
        self.registry.lock().await.last_id()
    }
}
