//! # camp-registry
//!
//! The camp's managing facade. A [`CampManagementSystem`] owns the personnel
//! roster, the training programs and the one equipment inventory, mints
//! human-readable ids, and enforces id/code uniqueness.
//!
//! ## Return conventions
//!
//! - Adding a duplicate person or program is a skip: `Ok(false)`.
//! - Looking up an unknown person is `Ok(None)`.
//! - Operations that need an existing record (equipment assignment,
//!   maintenance, details) fail with `CampError::InvalidData`.
//! - Authorization is always checked first and fails with
//!   `CampError::AccessDenied`.
//!
//! Collection accessors return a fresh `Vec` each call. Mutable lookups hand
//! out [`PersonnelEntry`] / [`ProgramEntry`] handles that forward only the
//! gated operations, so ids and codes registered here stay unique. The
//! inventory is the one owned object handed out directly, since it is keyed
//! by equipment id and gates its own operations.

#![deny(unsafe_code)]

pub mod config;
pub mod entry;
pub mod registry;

pub use config::{CampConfig, ConfigError};
pub use entry::{PersonnelEntry, ProgramEntry};
pub use registry::{CampManagementSystem, PersonnelCounter};

pub use camp_access::{Principal, Visibility};
pub use camp_inventory::{EquipmentInventory, EquipmentStatus, EquipmentView};
pub use camp_personnel::{Officer, Person, Personnel, Recruit};
pub use camp_training::TrainingProgram;
pub use camp_types::{CampError, CampResult, PersonId, Rank, Role};
