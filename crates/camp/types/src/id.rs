use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CampError, CampResult};

/// Identifier of a person (officer or recruit).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl PersonId {
    /// Wrap a raw person id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique code of a training program.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramCode(pub String);

impl ProgramCode {
    /// Wrap a raw program code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the raw value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProgramCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ProgramCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Key of an equipment item in the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EquipmentId(pub String);

impl EquipmentId {
    /// Wrap a raw equipment id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EquipmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EquipmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets the inventory map be queried with a plain &str.
impl Borrow<str> for EquipmentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Monotonic sequence minting `<prefix><zero-padded counter>` identifiers.
///
/// Once `u32::MAX` has been minted the sequence is exhausted and every
/// further call fails rather than wrapping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdSequence {
    next: Option<u32>,
    width: usize,
}

impl IdSequence {
    /// Zero-padding width used by [`IdSequence::new`].
    pub const DEFAULT_WIDTH: usize = 3;

    /// Sequence starting at 1 with the default width.
    pub fn new() -> Self {
        Self::starting_at(1, Self::DEFAULT_WIDTH)
    }

    /// Create a sequence whose first id uses `next`.
    pub fn starting_at(next: u32, width: usize) -> Self {
        Self {
            next: Some(next),
            width,
        }
    }

    /// Mint the next identifier and advance the counter.
    pub fn next_id(&mut self, prefix: &str) -> CampResult<String> {
        let value = self
            .next
            .ok_or_else(|| CampError::InvalidData("Id sequence exhausted".into()))?;
        self.next = value.checked_add(1);
        Ok(format!("{prefix}{value:0width$}", width = self.width))
    }

    /// The value the next call will use; `None` once exhausted.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
