//! Camp Inventory - equipment held by the camp
//!
//! Items are keyed by [`EquipmentId`]. Officers add, assign and maintain
//! them. Any authenticated caller may look an item up, but only an officer
//! sees the serial number, the assignee and the maintenance log.
//!
//! Adding an id twice is a skip, reported as `Ok(false)`. Every operation on
//! an existing id fails with `InvalidData` when the id is unknown.

#![deny(unsafe_code)]

pub mod view;

use std::collections::HashMap;

use camp_access::{authorize, visibility, Operation, Principal, Visibility};
use camp_types::{digest_mod, CampError, CampResult, EquipmentId, PersonId};
use chrono::Local;
use tracing::{debug, info};

pub use view::{EquipmentRecord, EquipmentStatus, EquipmentSummary, EquipmentView, MaintenanceEntry};

/// The camp's equipment, keyed by id.
#[derive(Debug, Default)]
pub struct EquipmentInventory {
    equipment: HashMap<EquipmentId, EquipmentRecord>,
}

impl EquipmentInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    /// Whether no items are held
    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    /// Check if an item with this id exists
    pub fn contains(&self, equipment_id: &str) -> bool {
        self.equipment.contains_key(equipment_id)
    }

    /// Register a new item. Returns `Ok(false)` if the id is already taken.
    pub fn add_equipment(
        &mut self,
        equipment_id: impl Into<EquipmentId>,
        name: impl Into<String>,
        category: impl Into<String>,
        caller: Option<&Principal>,
    ) -> CampResult<bool> {
        let officer = authorize(caller, Operation::AddEquipment, None)?;
        let id = equipment_id.into();
        if self.equipment.contains_key(&id) {
            debug!(equipment = %id, "Equipment already registered, skipping");
            return Ok(false);
        }

        let record = EquipmentRecord {
            serial: serial_for(&id),
            id: id.clone(),
            name: name.into(),
            category: category.into(),
            status: EquipmentStatus::Available,
            assigned_to: None,
            maintenance: Vec::new(),
        };
        info!(equipment = %id, by = %officer.id, "Equipment added");
        self.equipment.insert(id, record);
        Ok(true)
    }

    /// Hand an item to a person. Reassigning overwrites the previous holder.
    pub fn assign_equipment(
        &mut self,
        equipment_id: &str,
        assignee: &PersonId,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        let officer = authorize(caller, Operation::AssignEquipment, None)?;
        let record = self.existing_mut(equipment_id)?;
        record.assigned_to = Some(assignee.clone());
        record.status = EquipmentStatus::Assigned;
        info!(
            equipment = equipment_id,
            assignee = %assignee,
            by = %officer.id,
            "Equipment assigned"
        );
        Ok(())
    }

    /// Officer-gated maintenance entry for an existing item.
    pub fn log_maintenance(
        &mut self,
        equipment_id: &str,
        note: &str,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        let officer = authorize(caller, Operation::LogMaintenance, None)?;
        let record = self.existing_mut(equipment_id)?;
        record.maintenance.push(MaintenanceEntry {
            date: Local::now().date_naive(),
            officer: officer.label.clone(),
            note: note.to_string(),
        });
        info!(equipment = equipment_id, by = %officer.id, "Maintenance logged");
        Ok(())
    }

    /// Copy of an item, filtered by what the caller may see.
    pub fn get_equipment_details(
        &self,
        equipment_id: &str,
        caller: Option<&Principal>,
    ) -> CampResult<EquipmentView> {
        let requestor = authorize(caller, Operation::ViewEquipmentDetails, None)?;
        let record = self
            .equipment
            .get(equipment_id)
            .ok_or_else(|| not_found(equipment_id))?;

        debug!(equipment = equipment_id, requestor = %requestor.id, "Equipment details read");
        Ok(match visibility(requestor) {
            Visibility::Full => EquipmentView::Full(record.clone()),
            Visibility::Limited => EquipmentView::Limited(EquipmentSummary::from(record)),
        })
    }

    fn existing_mut(&mut self, equipment_id: &str) -> CampResult<&mut EquipmentRecord> {
        self.equipment
            .get_mut(equipment_id)
            .ok_or_else(|| not_found(equipment_id))
    }
}

fn not_found(equipment_id: &str) -> CampError {
    CampError::InvalidData(format!("Equipment ID {equipment_id} not found"))
}

fn serial_for(id: &EquipmentId) -> String {
    format!("SN-{}", digest_mod(id.as_str(), 10_000))
}
