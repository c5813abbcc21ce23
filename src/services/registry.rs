//! Equipment registry state machine
//!
//! Owns the id counter and the record store. Every operation runs to
//! completion on `&mut self`, so callers sharing a registry must serialize
//! access (see [`EquipmentService`](super::EquipmentService)).
//!
//! Lifecycle: `registered` -> (donor sets) `verified` -> `assigned`. The donor
//! may set any other label at any time; only `verified` unlocks assignment.

use chrono::{DateTime, Utc};

use super::clock::Clock;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{EquipmentId, EquipmentRecord, NewEquipment},
    },
    repository::{EquipmentStore, Repository},
};

pub struct EquipmentRegistry {
    store: Box<dyn EquipmentStore>,
    clock: Box<dyn Clock>,
    last_id: EquipmentId,
    last_tick: Option<DateTime<Utc>>,
}

impl EquipmentRegistry {
    /// Create a registry over the repository's equipment store.
    ///
    /// The id counter starts at the number of stored records, which is 0 for
    /// a fresh store.
    pub fn new(repository: Repository, clock: Box<dyn Clock>) -> Self {
        let store = repository.equipment;
        let last_id = store.len() as EquipmentId;
        Self {
            store,
            clock,
            last_id,
            last_tick: None,
        }
    }

    /// Last allocated id, 0 when nothing has been registered
    pub fn last_id(&self) -> EquipmentId {
        self.last_id
    }

    /// Register a new record owned by `caller` and return its id
    pub fn register(&mut self, data: NewEquipment, caller: &str) -> AppResult<EquipmentId> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("Equipment id space exhausted".to_string()))?;
        let now = self.tick();

        self.store.put(EquipmentRecord {
            id,
            name: data.name,
            description: data.description,
            condition: data.condition,
            manufacturer: data.manufacturer,
            manufacturing_date: data.manufacturing_date,
            donor_id: caller.to_string(),
            recipient_id: None,
            status: EquipmentStatus::Registered,
            registration_date: now,
            last_updated: now,
        });
        self.last_id = id;

        Ok(id)
    }

    /// Fetch a copy of a record. Reads are unrestricted.
    pub fn get(&self, id: EquipmentId) -> AppResult<EquipmentRecord> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Overwrite the status of a record. Any label is accepted.
    pub fn update_status(
        &mut self,
        id: EquipmentId,
        status: EquipmentStatus,
        caller: &str,
    ) -> AppResult<()> {
        let mut record = self.get_owned(id, caller)?;

        record.status = status;
        record.last_updated = self.tick();
        self.store.put(record);

        Ok(())
    }

    /// Assign a recipient to a `verified` record and move it to `assigned`.
    ///
    /// A second assignment fails because the record is no longer `verified`.
    pub fn assign_recipient(
        &mut self,
        id: EquipmentId,
        recipient: String,
        caller: &str,
    ) -> AppResult<()> {
        let mut record = self.get_owned(id, caller)?;

        if record.status != EquipmentStatus::Verified {
            return Err(AppError::InvalidState(format!(
                "Equipment {} is '{}', expected 'verified'",
                id, record.status
            )));
        }

        record.recipient_id = Some(recipient);
        record.status = EquipmentStatus::Assigned;
        record.last_updated = self.tick();
        self.store.put(record);

        Ok(())
    }

    /// Fetch a record for mutation by its donor
    fn get_owned(&self, id: EquipmentId, caller: &str) -> AppResult<EquipmentRecord> {
        let record = self.get(id)?;
        if !record.is_donor(caller) {
            return Err(AppError::Forbidden(format!(
                "Only the donor may modify equipment {}",
                id
            )));
        }
        Ok(record)
    }

    /// Current time, never earlier than any time previously handed out
    fn tick(&mut self) -> DateTime<Utc> {
        let now = match self.last_tick {
            Some(prev) => self.clock.now().max(prev),
            None => self.clock.now(),
        };
        self.last_tick = Some(now);
        now
    }
}
