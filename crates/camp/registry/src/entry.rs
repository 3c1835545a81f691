use std::fmt;
use std::ops::Deref;

use camp_access::{authorize, Operation, Principal};
use camp_personnel::{Person, Personnel};
use camp_training::TrainingProgram;
use camp_types::{CampError, CampResult, PersonId};

/// Write access to one person on the roster.
///
/// Reads go through `Deref<Target = Person>`. Writes are limited to the
/// person's own gated operations, so a roster entry can never be replaced
/// or have its id changed from outside the registry:
///
/// ```compile_fail
/// use camp_registry::{CampManagementSystem, Officer, Person, Personnel, Recruit};
///
/// let commander: Person = Officer::new("O001", "Emma Smith", "Colonel", "Alpha", "Infantry")
///     .unwrap()
///     .into();
/// let me = commander.principal();
/// let mut camp = CampManagementSystem::new("Alpha Training Camp", "Fort Benning");
/// camp.add_personnel(commander, Some(&me)).unwrap();
///
/// let mut entry = camp.find_personnel_by_id_mut("O001", Some(&me)).unwrap().unwrap();
/// *entry = Recruit::new("O001", "Impostor", "Alpha").unwrap().into();
/// ```
pub struct PersonnelEntry<'a> {
    person: &'a mut Person,
}

impl<'a> PersonnelEntry<'a> {
    pub(crate) fn new(person: &'a mut Person) -> Self {
        Self { person }
    }

    /// Set the rank from its name; recruits stay Private.
    pub fn set_rank(&mut self, value: &str) -> CampResult<()> {
        self.person.set_rank(value)
    }

    /// Move the person to another unit.
    pub fn set_unit(&mut self, value: &str) -> CampResult<()> {
        self.person.set_unit(value)
    }

    /// Officer-gated clearance change.
    pub fn update_security_clearance(&mut self, new_level: i32, caller: Option<&Principal>) -> CampResult<()> {
        self.person.update_security_clearance(new_level, caller)
    }

    /// Officer-gated append to the performance history.
    pub fn add_performance_record(&mut self, content: &str, caller: Option<&Principal>) -> CampResult<()> {
        self.person.add_performance_record(content, caller)
    }

    /// Officer-gated training score. Fails with `InvalidData` for officers.
    pub fn update_training_score(
        &mut self,
        training_type: &str,
        score: i32,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        match &mut *self.person {
            Person::Recruit(recruit) => recruit.update_training_score(training_type, score, caller),
            Person::Officer(officer) => {
                authorize(caller, Operation::UpdateTrainingScore, None)?;
                Err(not_a_recruit(officer.id()))
            }
        }
    }

    /// Officer-gated disciplinary entry. Fails with `InvalidData` for officers.
    pub fn add_disciplinary_action(&mut self, action: &str, caller: Option<&Principal>) -> CampResult<()> {
        match &mut *self.person {
            Person::Recruit(recruit) => recruit.add_disciplinary_action(action, caller),
            Person::Officer(officer) => {
                authorize(caller, Operation::AddDisciplinaryAction, None)?;
                Err(not_a_recruit(officer.id()))
            }
        }
    }
}

impl Deref for PersonnelEntry<'_> {
    type Target = Person;

    fn deref(&self) -> &Person {
        self.person
    }
}

impl fmt::Debug for PersonnelEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersonnelEntry").field(&*self.person).finish()
    }
}

fn not_a_recruit(id: &PersonId) -> CampError {
    CampError::InvalidData(format!("Personnel ID {id} is not a recruit"))
}

/// Write access to one registered training program.
///
/// The program code stays fixed; only its gated operations are reachable.
pub struct ProgramEntry<'a> {
    program: &'a mut TrainingProgram,
}

impl<'a> ProgramEntry<'a> {
    pub(crate) fn new(program: &'a mut TrainingProgram) -> Self {
        Self { program }
    }

    /// Officer-gated requirement append.
    pub fn add_requirement(&mut self, requirement: &str, caller: Option<&Principal>) -> CampResult<()> {
        self.program.add_requirement(requirement, caller)
    }

    /// Officer-gated metric threshold.
    pub fn add_performance_metric(
        &mut self,
        metric_name: &str,
        threshold: f64,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        self.program.add_performance_metric(metric_name, threshold, caller)
    }
}

impl Deref for ProgramEntry<'_> {
    type Target = TrainingProgram;

    fn deref(&self) -> &TrainingProgram {
        self.program
    }
}

impl fmt::Debug for ProgramEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProgramEntry").field(&*self.program).finish()
    }
}
