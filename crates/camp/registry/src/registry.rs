use camp_access::{authorize, Operation, Principal};
use camp_inventory::EquipmentInventory;
use camp_personnel::{Person, Personnel};
use camp_training::TrainingProgram;
use camp_types::{CampError, CampResult, IdSequence, PersonId};
use tracing::{debug, info};

use crate::config::CampConfig;
use crate::entry::{PersonnelEntry, ProgramEntry};

/// Advisory count of people currently on the roster.
///
/// Bumped by explicit register/deregister calls from the registry; nothing
/// relies on it for correctness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersonnelCounter {
    active: usize,
}

impl PersonnelCounter {
    /// Count one more person on the roster
    pub fn register(&mut self) {
        self.active += 1;
    }

    /// Count one fewer person, never below zero
    pub fn deregister(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Current count
    pub fn active(&self) -> usize {
        self.active
    }
}

/// The training camp: roster, programs and equipment.
pub struct CampManagementSystem {
    name: String,
    location: String,
    personnel: Vec<Person>,
    training_programs: Vec<TrainingProgram>,
    equipment_inventory: EquipmentInventory,
    id_sequence: IdSequence,
    counter: PersonnelCounter,
}

impl CampManagementSystem {
    /// Create an empty camp with the default id sequence
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::with_sequence(name.into(), location.into(), IdSequence::new())
    }

    /// Create an empty camp from configuration
    pub fn from_config(config: &CampConfig) -> Self {
        Self::with_sequence(config.name.clone(), config.location.clone(), config.id_sequence())
    }

    fn with_sequence(name: String, location: String, id_sequence: IdSequence) -> Self {
        info!(camp = %name, location = %location, "Camp registry created");
        Self {
            name,
            location,
            personnel: Vec::new(),
            training_programs: Vec::new(),
            equipment_inventory: EquipmentInventory::new(),
            id_sequence,
            counter: PersonnelCounter::default(),
        }
    }

    /// Camp name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Camp location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Roster snapshot. Changing the returned `Vec` leaves the roster alone.
    pub fn personnel(&self) -> Vec<&Person> {
        self.personnel.iter().collect()
    }

    /// Program snapshot, in registration order.
    pub fn training_programs(&self) -> Vec<&TrainingProgram> {
        self.training_programs.iter().collect()
    }

    /// Mint `<prefix><padded counter>` and advance the counter. Ungated.
    ///
    /// Fails with `InvalidData` once the sequence is exhausted.
    pub fn get_next_id(&mut self, prefix: &str) -> CampResult<String> {
        self.id_sequence.next_id(prefix)
    }

    /// Number of people currently on the roster
    pub fn active_personnel(&self) -> usize {
        self.counter.active()
    }

    /// Add a person. `Ok(false)` if someone with the same id is already on
    /// the roster.
    pub fn add_personnel(&mut self, person: Person, caller: Option<&Principal>) -> CampResult<bool> {
        let officer = authorize(caller, Operation::AddPersonnel, None)?;
        if self.position_of(person.id().as_str()).is_some() {
            debug!(person = %person.id(), "Person already on roster, skipping");
            return Ok(false);
        }
        info!(person = %person.id(), role = %person.role(), by = %officer.id, "Personnel added");
        self.personnel.push(person);
        self.counter.register();
        Ok(true)
    }

    /// Take a person off the roster, returning them if they were on it.
    pub fn remove_personnel(&mut self, person_id: &str, caller: Option<&Principal>) -> CampResult<Option<Person>> {
        let officer = authorize(caller, Operation::RemovePersonnel, None)?;
        let Some(index) = self.position_of(person_id) else {
            return Ok(None);
        };
        let removed = self.personnel.remove(index);
        self.counter.deregister();
        info!(person = person_id, by = %officer.id, "Personnel removed");
        Ok(Some(removed))
    }

    /// `Ok(None)` when nobody has that id.
    pub fn find_personnel_by_id(&self, person_id: &str, caller: Option<&Principal>) -> CampResult<Option<&Person>> {
        authorize(caller, Operation::FindPersonnel, None)?;
        Ok(self.personnel.iter().find(|p| p.id().as_str() == person_id))
    }

    /// Writable form of [`Self::find_personnel_by_id`]. The entry only
    /// exposes the person's own gated operations.
    pub fn find_personnel_by_id_mut(
        &mut self,
        person_id: &str,
        caller: Option<&Principal>,
    ) -> CampResult<Option<PersonnelEntry<'_>>> {
        authorize(caller, Operation::FindPersonnel, None)?;
        Ok(self
            .personnel
            .iter_mut()
            .find(|p| p.id().as_str() == person_id)
            .map(PersonnelEntry::new))
    }

    /// Officer-gated roster filtered by exact unit name.
    pub fn get_personnel_by_unit(&self, unit: &str, caller: Option<&Principal>) -> CampResult<Vec<&Person>> {
        authorize(caller, Operation::ViewUnitPersonnel, None)?;
        Ok(self.personnel.iter().filter(|p| p.unit() == unit).collect())
    }

    /// Add a program. `Ok(false)` if its code is already taken.
    pub fn add_training_program(
        &mut self,
        program: TrainingProgram,
        caller: Option<&Principal>,
    ) -> CampResult<bool> {
        let officer = authorize(caller, Operation::AddTrainingProgram, None)?;
        if self.training_programs.iter().any(|p| p.code() == program.code()) {
            debug!(program = %program.code(), "Program code already registered, skipping");
            return Ok(false);
        }
        info!(program = %program.code(), by = %officer.id, "Training program added");
        self.training_programs.push(program);
        Ok(true)
    }

    /// Look up a program by code
    pub fn find_training_program(&self, code: &str) -> Option<&TrainingProgram> {
        self.training_programs.iter().find(|p| p.code().as_str() == code)
    }

    /// Writable handle on a registered program; its code cannot change.
    pub fn find_training_program_mut(&mut self, code: &str) -> Option<ProgramEntry<'_>> {
        self.training_programs
            .iter_mut()
            .find(|p| p.code().as_str() == code)
            .map(ProgramEntry::new)
    }

    /// The live inventory. Its operations carry their own gates.
    pub fn get_equipment_inventory(&mut self) -> &mut EquipmentInventory {
        &mut self.equipment_inventory
    }

    /// Read-only inventory
    pub fn equipment_inventory(&self) -> &EquipmentInventory {
        &self.equipment_inventory
    }

    /// Assign equipment to someone on the roster.
    ///
    /// Unlike the inventory's own assignment, the holder must be a
    /// registered person; an unknown id is `InvalidData`.
    pub fn assign_equipment(
        &mut self,
        equipment_id: &str,
        person_id: &str,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        authorize(caller, Operation::AssignEquipment, None)?;
        let holder: PersonId = self
            .personnel
            .iter()
            .find(|p| p.id().as_str() == person_id)
            .map(|p| p.id().clone())
            .ok_or_else(|| CampError::InvalidData(format!("Personnel ID {person_id} not found")))?;
        self.equipment_inventory
            .assign_equipment(equipment_id, &holder, caller)
    }

    /// Resolve an item's holder back to the roster.
    ///
    /// `Ok(None)` if the item is unassigned or its holder has since left the
    /// roster.
    pub fn equipment_holder(&self, equipment_id: &str, caller: Option<&Principal>) -> CampResult<Option<&Person>> {
        authorize(caller, Operation::ViewEquipmentHolder, None)?;
        let view = self.equipment_inventory.get_equipment_details(equipment_id, caller)?;
        Ok(view
            .assigned_to()
            .and_then(|holder| self.personnel.iter().find(|p| p.id() == holder)))
    }

    fn position_of(&self, person_id: &str) -> Option<usize> {
        self.personnel
            .iter()
            .position(|p| p.id().as_str() == person_id)
    }
}
