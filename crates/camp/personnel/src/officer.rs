use camp_types::{digest_mod, CampResult, PersonId, Rank, Role};
use serde::Serialize;

use crate::record::{sealed, Personnel, ServiceRecord};

/// Placeholder returned wherever a command code would be read.
pub const REDACTED: &str = "RESTRICTED ACCESS";

/// A commissioned officer.
#[derive(Clone, Debug, Serialize)]
pub struct Officer {
    record: ServiceRecord,
    specialization: String,
    #[serde(skip)]
    command_code: String,
}

impl Officer {
    /// Create an officer. Fails on an unknown rank or a short unit name.
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        rank: &str,
        unit: impl Into<String>,
        specialization: impl Into<String>,
    ) -> CampResult<Self> {
        let id = id.into();
        let name = name.into();
        let rank: Rank = rank.parse()?;
        let command_code = format!("CMD-{}-{}", id, digest_mod(&name, 1000));
        Ok(Self {
            record: ServiceRecord::new(id, name, rank, unit.into())?,
            specialization: specialization.into(),
            command_code,
        })
    }

    /// Field of specialization.
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Always the redaction placeholder, never the stored code.
    pub fn command_code(&self) -> &'static str {
        REDACTED
    }

    /// Check a presented code against the stored one without revealing it.
    pub fn verify_command_code(&self, candidate: &str) -> bool {
        self.command_code == candidate
    }
}

impl Personnel for Officer {
    fn record(&self) -> &ServiceRecord {
        &self.record
    }

    fn record_mut(&mut self, _: sealed::Token) -> &mut ServiceRecord {
        &mut self.record
    }

    fn role(&self) -> Role {
        Role::Officer
    }

    fn display_info(&self) -> String {
        format!(
            "ID: {} | Name: {} | Rank: {} | Unit: {} | Specialization: {}",
            self.id(),
            self.name(),
            self.rank(),
            self.unit(),
            self.specialization
        )
    }

    fn perform_duty(&self) -> String {
        format!("{} {} is commanding {}", self.rank(), self.name(), self.unit())
    }
}
