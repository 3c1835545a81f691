use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampError;

/// The enumerated rank ladder, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Private,
    Corporal,
    Sergeant,
    Lieutenant,
    Captain,
    Major,
    Colonel,
    General,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 8] = [
        Rank::Private,
        Rank::Corporal,
        Rank::Sergeant,
        Rank::Lieutenant,
        Rank::Captain,
        Rank::Major,
        Rank::Colonel,
        Rank::General,
    ];

    /// Canonical rank name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Private => "Private",
            Rank::Corporal => "Corporal",
            Rank::Sergeant => "Sergeant",
            Rank::Lieutenant => "Lieutenant",
            Rank::Captain => "Captain",
            Rank::Major => "Major",
            Rank::Colonel => "Colonel",
            Rank::General => "General",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = CampError;

    /// Exact, case-sensitive match against the ladder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| CampError::InvalidData(format!("Invalid rank: {s}")))
    }
}

/// The two personnel roles. Officer holds a superset of Recruit's capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Officer,
    Recruit,
}

impl Role {
    /// Whether this role passes officer gates.
    pub fn is_officer(&self) -> bool {
        matches!(self, Role::Officer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Officer => f.write_str("Officer"),
            Role::Recruit => f.write_str("Recruit"),
        }
    }
}
