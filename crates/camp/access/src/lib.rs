//! Camp Access - the authorization policy threaded through every camp record
//!
//! Every gated operation names itself as an [`Operation`]; the operation maps
//! to exactly one [`Gate`], and [`evaluate`] decides the gate against the
//! caller without touching any record state. Record crates call
//! [`authorize`] first and only then validate or mutate.
//!
//! A caller is `Option<&Principal>`: `None` means nobody authenticated.

#![deny(unsafe_code)]

use camp_types::{CampError, CampResult, PersonId, Role};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Snapshot of who is asking.
///
/// Taken from a person record, so a person can authorize operations on
/// their own record while that record is mutably borrowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PersonId,
    pub role: Role,
    /// `"<rank> <name>"`, stamped on audit entries written by this caller.
    pub label: String,
}

impl Principal {
    /// Create a caller snapshot
    pub fn new(id: impl Into<PersonId>, role: Role, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            label: label.into(),
        }
    }

    /// Whether this caller passes officer gates
    pub fn is_officer(&self) -> bool {
        self.role.is_officer()
    }
}

/// The capability check an operation requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// Caller must be an Officer.
    OfficerOnly,
    /// Caller must be the subject of the record, or an Officer.
    SelfOrOfficer,
    /// Any present caller.
    Authenticated,
}

/// Every gated action in the camp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    UpdateSecurityClearance,
    AddPerformanceRecord,
    ViewPerformanceRecords,
    UpdateTrainingScore,
    ViewTrainingScores,
    AddDisciplinaryAction,
    ViewDisciplinaryRecord,
    AddRequirement,
    AddPerformanceMetric,
    ViewPerformanceMetrics,
    AddEquipment,
    AssignEquipment,
    LogMaintenance,
    ViewEquipmentDetails,
    ViewEquipmentHolder,
    AddPersonnel,
    RemovePersonnel,
    FindPersonnel,
    ViewUnitPersonnel,
    AddTrainingProgram,
}

impl Operation {
    /// The gate guarding this operation
    pub fn gate(&self) -> Gate {
        use Operation::*;
        match self {
            ViewPerformanceRecords | ViewTrainingScores | ViewDisciplinaryRecord => {
                Gate::SelfOrOfficer
            }
            ViewEquipmentDetails | FindPersonnel => Gate::Authenticated,
            UpdateSecurityClearance
            | AddPerformanceRecord
            | UpdateTrainingScore
            | AddDisciplinaryAction
            | AddRequirement
            | AddPerformanceMetric
            | ViewPerformanceMetrics
            | AddEquipment
            | AssignEquipment
            | LogMaintenance
            | ViewEquipmentHolder
            | AddPersonnel
            | RemovePersonnel
            | ViewUnitPersonnel
            | AddTrainingProgram => Gate::OfficerOnly,
        }
    }

    /// Message carried by the `AccessDenied` error for this operation.
    pub fn denial_message(&self) -> &'static str {
        use Operation::*;
        match self {
            UpdateSecurityClearance => "Security clearance can only be updated by an Officer",
            AddPerformanceRecord => "Only officers can add performance records",
            ViewPerformanceRecords => "Not authorized to view performance records",
            UpdateTrainingScore => "Only officers can update training scores",
            ViewTrainingScores => "Not authorized to view training scores",
            AddDisciplinaryAction => "Only officers can add disciplinary actions",
            ViewDisciplinaryRecord => "Not authorized to view disciplinary records",
            AddRequirement => "Only officers can add requirements",
            AddPerformanceMetric => "Only officers can add performance metrics",
            ViewPerformanceMetrics => "Only officers can view performance metrics",
            AddEquipment => "Only officers can add equipment",
            AssignEquipment => "Only officers can assign equipment",
            LogMaintenance => "Only officers can log maintenance",
            ViewEquipmentDetails => "Authentication required to access equipment details",
            ViewEquipmentHolder => "Only officers can view equipment assignments",
            AddPersonnel => "Only officers can add personnel",
            RemovePersonnel => "Only officers can remove personnel",
            FindPersonnel => "Authentication required to access personnel records",
            ViewUnitPersonnel => "Only officers can view unit personnel",
            AddTrainingProgram => "Only officers can add training programs",
        }
    }
}

/// Outcome of a policy evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(Gate),
}

impl AccessDecision {
    /// Whether the decision permits the operation
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Decide whether `caller` may perform `op`.
///
/// `subject` is the person whose record is touched; it only matters for
/// [`Gate::SelfOrOfficer`]. An absent caller fails every gate.
pub fn evaluate(
    caller: Option<&Principal>,
    op: Operation,
    subject: Option<&PersonId>,
) -> AccessDecision {
    let gate = op.gate();
    let allowed = match (caller, gate) {
        (None, _) => false,
        (Some(p), Gate::OfficerOnly) => p.is_officer(),
        (Some(p), Gate::SelfOrOfficer) => p.is_officer() || subject == Some(&p.id),
        (Some(_), Gate::Authenticated) => true,
    };

    if allowed {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied(gate)
    }
}

/// [`evaluate`], turning a denial into `CampError::AccessDenied`.
///
/// Returns the principal so callers can stamp audit entries with its label.
pub fn authorize<'a>(
    caller: Option<&'a Principal>,
    op: Operation,
    subject: Option<&PersonId>,
) -> CampResult<&'a Principal> {
    match (evaluate(caller, op, subject), caller) {
        (AccessDecision::Allowed, Some(principal)) => Ok(principal),
        (decision, _) => {
            warn!(
                operation = ?op,
                decision = ?decision,
                caller = caller.map(|p| p.id.as_str()).unwrap_or("<none>"),
                "Access denied"
            );
            Err(CampError::AccessDenied(op.denial_message().to_string()))
        }
    }
}

/// How much of a record a caller may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Full,
    Limited,
}

/// Choose the record view for an authenticated caller.
pub fn visibility(caller: &Principal) -> Visibility {
    if caller.is_officer() {
        Visibility::Full
    } else {
        Visibility::Limited
    }
}
