//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle label of an equipment record.
///
/// The vocabulary is open: donors may set any label, and only `verified`
/// carries enforced meaning (it unlocks recipient assignment). Labels the
/// registry does not assign itself are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentStatus {
    Registered,
    Verified,
    Assigned,
    Other(String),
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EquipmentStatus::Registered => "registered",
            EquipmentStatus::Verified => "verified",
            EquipmentStatus::Assigned => "assigned",
            EquipmentStatus::Other(label) => label,
        }
    }
}

impl From<&str> for EquipmentStatus {
    fn from(s: &str) -> Self {
        match s {
            "registered" => EquipmentStatus::Registered,
            "verified" => EquipmentStatus::Verified,
            "assigned" => EquipmentStatus::Assigned,
            other => EquipmentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for EquipmentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "registered" | "verified" | "assigned" => EquipmentStatus::from(s.as_str()),
            _ => EquipmentStatus::Other(s),
        }
    }
}

impl From<EquipmentStatus> for String {
    fn from(status: EquipmentStatus) -> Self {
        match status {
            EquipmentStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
