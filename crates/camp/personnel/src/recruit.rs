use std::collections::BTreeMap;

use camp_access::{authorize, Operation, Principal};
use camp_types::{CampError, CampResult, PersonId, Rank, Role};
use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use crate::record::{sealed, DisciplinaryAction, Personnel, ServiceRecord};

/// Keys of the aptitude ratings every recruit starts with.
pub const APTITUDE_KEYS: [&str; 3] = ["leadership", "technical", "physical"];

/// A trainee. Always holds the rank of Private.
#[derive(Clone, Debug, Serialize)]
pub struct Recruit {
    record: ServiceRecord,
    training_scores: BTreeMap<String, u8>,
    disciplinary_record: Vec<DisciplinaryAction>,
    aptitude_ratings: BTreeMap<String, u32>,
}

impl Recruit {
    pub const MAX_SCORE: i32 = 100;

    /// Create a recruit at the rank of Private.
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        unit: impl Into<String>,
    ) -> CampResult<Self> {
        Ok(Self {
            record: ServiceRecord::new(id.into(), name.into(), Rank::Private, unit.into())?,
            training_scores: BTreeMap::new(),
            disciplinary_record: Vec::new(),
            aptitude_ratings: APTITUDE_KEYS.iter().map(|k| (k.to_string(), 0)).collect(),
        })
    }

    /// Officer-gated; overwrites any previous score for `training_type`.
    pub fn update_training_score(
        &mut self,
        training_type: &str,
        score: i32,
        caller: Option<&Principal>,
    ) -> CampResult<()> {
        let instructor = authorize(caller, Operation::UpdateTrainingScore, None)?;
        if !(0..=Self::MAX_SCORE).contains(&score) {
            return Err(CampError::InvalidData("Score must be between 0 and 100".into()));
        }
        self.training_scores
            .insert(training_type.to_string(), score as u8);
        info!(
            recruit = %self.id(),
            training = training_type,
            score,
            by = %instructor.id,
            "Training score updated"
        );
        Ok(())
    }

    /// Self-or-officer gated copy of the training scores.
    pub fn get_training_scores(&self, caller: Option<&Principal>) -> CampResult<BTreeMap<String, u8>> {
        authorize(caller, Operation::ViewTrainingScores, Some(self.id()))?;
        debug!(recruit = %self.id(), "Training scores read");
        Ok(self.training_scores.clone())
    }

    /// Officer-gated append to the disciplinary record.
    pub fn add_disciplinary_action(&mut self, action: &str, caller: Option<&Principal>) -> CampResult<()> {
        let officer = authorize(caller, Operation::AddDisciplinaryAction, None)?;
        self.disciplinary_record.push(DisciplinaryAction {
            date: Local::now().date_naive(),
            officer: officer.label.clone(),
            action: action.to_string(),
        });
        info!(recruit = %self.id(), by = %officer.id, "Disciplinary action recorded");
        Ok(())
    }

    /// Self-or-officer gated copy of the disciplinary record.
    pub fn get_disciplinary_record(&self, caller: Option<&Principal>) -> CampResult<Vec<DisciplinaryAction>> {
        authorize(caller, Operation::ViewDisciplinaryRecord, Some(self.id()))?;
        Ok(self.disciplinary_record.clone())
    }

    /// Copy of the aptitude ratings. Ungated.
    pub fn aptitude_ratings(&self) -> BTreeMap<String, u32> {
        self.aptitude_ratings.clone()
    }
}

impl Personnel for Recruit {
    fn record(&self) -> &ServiceRecord {
        &self.record
    }

    fn record_mut(&mut self, _: sealed::Token) -> &mut ServiceRecord {
        &mut self.record
    }

    fn role(&self) -> Role {
        Role::Recruit
    }

    fn set_rank(&mut self, value: &str) -> CampResult<()> {
        if value != Rank::Private.as_str() {
            return Err(CampError::InvalidData("Recruits cannot change their rank".into()));
        }
        self.record.set_rank(Rank::Private);
        Ok(())
    }

    fn display_info(&self) -> String {
        format!(
            "ID: {} | Name: {} | Rank: {} | Unit: {}",
            self.id(),
            self.name(),
            self.rank(),
            self.unit()
        )
    }

    fn perform_duty(&self) -> String {
        format!("{} is training at {}", self.name(), self.unit())
    }
}
