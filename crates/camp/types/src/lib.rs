//! Camp Types - shared vocabulary for the training camp registry
//!
//! Identifiers, the rank ladder, the two personnel roles and the two
//! domain error kinds every other camp crate speaks in.

#![deny(unsafe_code)]

pub mod digest;
pub mod error;
pub mod id;
pub mod rank;

pub use digest::digest_mod;
pub use error::{CampError, CampResult};
pub use id::{EquipmentId, IdSequence, PersonId, ProgramCode};
pub use rank::{Rank, Role};

/// Minimum number of characters in a unit name.
pub const MIN_UNIT_LEN: usize = 3;

/// Validate a unit name.
pub fn validate_unit(unit: &str) -> CampResult<()> {
    if unit.chars().count() >= MIN_UNIT_LEN {
        Ok(())
    } else {
        Err(CampError::InvalidData(format!("Invalid unit name: {unit}")))
    }
}
