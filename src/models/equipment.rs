//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::EquipmentStatus;

/// Registry-assigned equipment identifier (first id is 1)
pub type EquipmentId = u64;

/// Donated equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentRecord {
    pub id: EquipmentId,
    pub name: String,
    pub description: String,
    pub condition: String,
    pub manufacturer: String,
    /// Manufacturing date encoded as YYYYMMDD
    pub manufacturing_date: u32,
    /// Identity that registered the record
    pub donor_id: String,
    /// Identity the record was assigned to, set once
    pub recipient_id: Option<String>,
    #[schema(value_type = String, example = "registered")]
    pub status: EquipmentStatus,
    pub registration_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl EquipmentRecord {
    pub fn is_donor(&self, caller: &str) -> bool {
        self.donor_id == caller
    }
}

/// Register equipment request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewEquipment {
    pub name: String,
    pub description: String,
    pub condition: String,
    pub manufacturer: String,
    /// Manufacturing date encoded as YYYYMMDD
    #[schema(example = 20230101)]
    pub manufacturing_date: u32,
}

/// Update status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatus {
    #[schema(example = "verified")]
    pub status: String,
}

/// Assign recipient request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignRecipient {
    pub recipient_id: String,
}
