use camp_access::{authorize, Operation, Principal};
use camp_types::{validate_unit, CampError, CampResult, PersonId, Rank, Role};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One entry in a person's performance history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub date: NaiveDate,
    /// `"<rank> <name>"` of the evaluating officer.
    pub evaluator: String,
    pub content: String,
}

/// One entry in a recruit's disciplinary record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinaryAction {
    pub date: NaiveDate,
    pub officer: String,
    pub action: String,
}

/// State shared by every person.
///
/// Fields are private; mutation is only reachable through the gated
/// operations of [`Personnel`].
#[derive(Clone, Debug, Serialize)]
pub struct ServiceRecord {
    id: PersonId,
    name: String,
    rank: Rank,
    unit: String,
    security_clearance: u8,
    performance_records: Vec<PerformanceRecord>,
}

impl ServiceRecord {
    /// Lowest clearance level; every record starts here.
    pub const MIN_CLEARANCE: i32 = 1;
    pub const MAX_CLEARANCE: i32 = 5;

    pub(crate) fn new(
        id: PersonId,
        name: String,
        rank: Rank,
        unit: String,
    ) -> CampResult<Self> {
        validate_unit(&unit)?;
        Ok(Self {
            id,
            name,
            rank,
            unit,
            security_clearance: Self::MIN_CLEARANCE as u8,
            performance_records: Vec::new(),
        })
    }

    /// Unique person id.
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn security_clearance(&self) -> u8 {
        self.security_clearance
    }

    pub(crate) fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
    }

    pub(crate) fn set_unit(&mut self, unit: String) {
        self.unit = unit;
    }

    pub(crate) fn set_security_clearance(&mut self, level: u8) {
        self.security_clearance = level;
    }

    pub(crate) fn push_performance_record(&mut self, record: PerformanceRecord) {
        self.performance_records.push(record);
    }

    pub(crate) fn performance_records(&self) -> &[PerformanceRecord] {
        &self.performance_records
    }
}

pub(crate) mod sealed {
    /// Unnameable outside this crate, so only the person types defined here
    /// can reach a mutable [`ServiceRecord`](super::ServiceRecord).
    #[derive(Clone, Copy, Debug)]
    pub struct Token(());

    pub(crate) const TOKEN: Token = Token(());
}

/// Capability set shared by officers and recruits.
///
/// Implemented only by [`Officer`](crate::Officer),
/// [`Recruit`](crate::Recruit) and [`Person`](crate::Person). The service
/// record can be read from anywhere but only rewritten by those types:
///
/// ```compile_fail
/// use camp_personnel::{Officer, Personnel, Recruit};
///
/// let officer = Officer::new("O001", "Emma Smith", "Colonel", "Alpha", "Infantry").unwrap();
/// let mut recruit = Recruit::new("R001", "John Davis", "Alpha").unwrap();
/// *recruit.record_mut() = officer.record().clone();
/// ```
pub trait Personnel {
    fn record(&self) -> &ServiceRecord;

    #[doc(hidden)]
    fn record_mut(&mut self, token: sealed::Token) -> &mut ServiceRecord;

    fn role(&self) -> Role;

    /// Role-appropriate one-line summary.
    fn display_info(&self) -> String;

    /// Role-appropriate one-line narrative of the person's duty.
    fn perform_duty(&self) -> String;

    fn id(&self) -> &PersonId {
        self.record().id()
    }

    fn name(&self) -> &str {
        self.record().name()
    }

    fn rank(&self) -> Rank {
        self.record().rank()
    }

    fn unit(&self) -> &str {
        self.record().unit()
    }

    fn security_clearance(&self) -> u8 {
        self.record().security_clearance()
    }

    /// Point-in-time caller snapshot of this person.
    ///
    /// The label is fixed when the snapshot is taken; take a fresh one after
    /// a rank change so audit entries carry the current rank.
    fn principal(&self) -> Principal {
        Principal::new(
            self.id().clone(),
            self.role(),
            format!("{} {}", self.rank(), self.name()),
        )
    }

    /// Set the rank from its name. Unknown names leave the rank unchanged.
    fn set_rank(&mut self, value: &str) -> CampResult<()> {
        let rank: Rank = value.parse()?;
        self.record_mut(sealed::TOKEN).set_rank(rank);
        Ok(())
    }

    fn set_unit(&mut self, value: &str) -> CampResult<()> {
        validate_unit(value)?;
        self.record_mut(sealed::TOKEN).set_unit(value.to_string());
        Ok(())
    }

    /// Officer-gated; the gate is checked before the range.
    fn update_security_clearance(
        &mut self,
        new_level: i32,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        let officer = authorize(caller, Operation::UpdateSecurityClearance, None)?;
        if !(ServiceRecord::MIN_CLEARANCE..=ServiceRecord::MAX_CLEARANCE).contains(&new_level) {
            return Err(CampError::InvalidData(
                "Clearance level must be between 1 and 5".into(),
            ));
        }
        self.record_mut(sealed::TOKEN).set_security_clearance(new_level as u8);
        info!(
            person = %self.id(),
            level = new_level,
            by = %officer.id,
            "Security clearance updated"
        );
        Ok(())
    }

    fn add_performance_record(&mut self, content: &str, caller: Option<&Principal>) -> CampResult<()> {
        let evaluator = authorize(caller, Operation::AddPerformanceRecord, None)?;
        let entry = PerformanceRecord {
            date: Local::now().date_naive(),
            evaluator: evaluator.label.clone(),
            content: content.to_string(),
        };
        self.record_mut(sealed::TOKEN).push_performance_record(entry);
        info!(person = %self.id(), by = %evaluator.id, "Performance record added");
        Ok(())
    }

    /// Self-or-officer gated copy of the performance history.
    fn get_performance_records(&self, caller: Option<&Principal>) -> CampResult<Vec<PerformanceRecord>> {
        authorize(caller, Operation::ViewPerformanceRecords, Some(self.id()))?;
        debug!(person = %self.id(), "Performance records read");
        Ok(self.record().performance_records().to_vec())
    }

    /// Same as [`Personnel::get_performance_records`].
    fn get_performance_history(&self, caller: Option<&Principal>) -> CampResult<Vec<PerformanceRecord>> {
        self.get_performance_records(caller)
    }
}
