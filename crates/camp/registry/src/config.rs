//! Registry configuration

use std::path::Path;

use camp_types::IdSequence;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Camp configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampConfig {
    /// Camp name
    pub name: String,

    /// Camp location
    pub location: String,

    /// First value of the id sequence
    pub id_sequence_start: u32,

    /// Zero-padding width of minted ids
    pub id_width: usize,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            name: "Alpha Training Camp".into(),
            location: "Fort Benning".into(),
            id_sequence_start: 1,
            id_width: IdSequence::DEFAULT_WIDTH,
        }
    }
}

impl CampConfig {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: CampConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".into()));
        }
        if self.location.trim().is_empty() {
            return Err(ConfigError::Invalid("location must not be empty".into()));
        }
        if self.id_sequence_start == 0 {
            return Err(ConfigError::Invalid("id_sequence_start must be at least 1".into()));
        }
        if self.id_width == 0 {
            return Err(ConfigError::Invalid("id_width must be at least 1".into()));
        }
        Ok(())
    }

    /// Id sequence described by this configuration
    pub fn id_sequence(&self) -> IdSequence {
        IdSequence::starting_at(self.id_sequence_start, self.id_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CampConfig::default();
        assert_eq!(config.name, "Alpha Training Camp");
        assert_eq!(config.location, "Fort Benning");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_missing_config() {
        let config = CampConfig::load("/nonexistent/path/camp.toml").unwrap();
        assert_eq!(config, CampConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = CampConfig::from_toml_str(
            r#"
            name = "Bravo Camp"
            id_sequence_start = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "Bravo Camp");
        assert_eq!(config.location, "Fort Benning");
        assert_eq!(config.id_sequence().next_id("R").unwrap(), "R100");
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            CampConfig::from_toml_str("id_width = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CampConfig::from_toml_str("name = \"  \""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CampConfig::from_toml_str("id_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
