use std::fmt;

use camp_types::{EquipmentId, PersonId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    Assigned,
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentStatus::Available => f.write_str("Available"),
            EquipmentStatus::Assigned => f.write_str("Assigned"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub date: NaiveDate,
    pub officer: String,
    pub note: String,
}

/// Everything the inventory knows about an item.
///
/// `status` is `Assigned` exactly when `assigned_to` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: EquipmentId,
    pub name: String,
    pub category: String,
    pub serial: String,
    pub status: EquipmentStatus,
    /// Holder's id; resolve through the registry.
    pub assigned_to: Option<PersonId>,
    pub maintenance: Vec<MaintenanceEntry>,
}

/// The fields any authenticated caller may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSummary {
    pub id: EquipmentId,
    pub name: String,
    pub category: String,
    pub status: EquipmentStatus,
}

impl From<&EquipmentRecord> for EquipmentSummary {
    fn from(record: &EquipmentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            status: record.status,
        }
    }
}

/// Role-filtered copy of an item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EquipmentView {
    Full(EquipmentRecord),
    Limited(EquipmentSummary),
}

impl EquipmentView {
    /// Whether this is the officer view.
    pub fn is_full(&self) -> bool {
        matches!(self, EquipmentView::Full(_))
    }

    /// Equipment id.
    pub fn id(&self) -> &EquipmentId {
        match self {
            EquipmentView::Full(r) => &r.id,
            EquipmentView::Limited(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EquipmentView::Full(r) => &r.name,
            EquipmentView::Limited(s) => &s.name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            EquipmentView::Full(r) => &r.category,
            EquipmentView::Limited(s) => &s.category,
        }
    }

    pub fn status(&self) -> EquipmentStatus {
        match self {
            EquipmentView::Full(r) => r.status,
            EquipmentView::Limited(s) => s.status,
        }
    }

    /// Serial number; officer view only.
    pub fn serial(&self) -> Option<&str> {
        match self {
            EquipmentView::Full(r) => Some(&r.serial),
            EquipmentView::Limited(_) => None,
        }
    }

    /// Current holder; officer view only.
    pub fn assigned_to(&self) -> Option<&PersonId> {
        match self {
            EquipmentView::Full(r) => r.assigned_to.as_ref(),
            EquipmentView::Limited(_) => None,
        }
    }

    /// Maintenance history; officer view only.
    pub fn maintenance(&self) -> Option<&[MaintenanceEntry]> {
        match self {
            EquipmentView::Full(r) => Some(&r.maintenance),
            EquipmentView::Limited(_) => None,
        }
    }
}
