use thiserror::Error;

/// Domain errors surfaced by every camp operation.
///
/// Only two kinds exist. Create-or-skip operations (duplicate personnel,
/// duplicate program, duplicate equipment) and lookups of unknown personnel
/// report through their return value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CampError {
    /// The caller lacks the capability the operation requires.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// A value failed a domain constraint, or a referenced record must exist
    /// and does not.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl CampError {
    /// Check if this is an authorization failure
    pub fn is_access_denied(&self) -> bool {
        matches!(self, CampError::AccessDenied(_))
    }

    /// Check if this is a validation failure
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, CampError::InvalidData(_))
    }
}

/// Result type for camp operations
pub type CampResult<T> = Result<T, CampError>;
