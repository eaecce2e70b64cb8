//! Interaction configuration.
//!
//! Loaded once at startup and copied into the components that need it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default grid unit for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 10.0;

/// Default width of the tolerance band around a frame border.
pub const DEFAULT_BORDER_OFFSET: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Grid size must be a positive finite number, got {0}")]
    InvalidGridSize(f64),
    #[error("Border offset must be a non-negative finite number, got {0}")]
    InvalidBorderOffset(f64),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings shared by grid snapping and frame interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Grid unit in logical diagram units.
    pub grid_size: f64,
    /// Half-width of the band around a frame border that still counts as border.
    /// `0` selects the default.
    pub border_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            border_offset: DEFAULT_BORDER_OFFSET,
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded interaction config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if !self.border_offset.is_finite() || self.border_offset < 0.0 {
            return Err(ConfigError::InvalidBorderOffset(self.border_offset));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InteractionConfig::default();
        assert_eq!(config.grid_size, 10.0);
        assert_eq!(config.border_offset, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = InteractionConfig::from_json(r#"{ "grid_size": 20.0 }"#).unwrap();
        assert_eq!(config.grid_size, 20.0);
        assert_eq!(config.border_offset, DEFAULT_BORDER_OFFSET);
    }

    #[test]
    fn test_rejects_bad_grid_size() {
        let err = InteractionConfig::from_json(r#"{ "grid_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGridSize(_)));

        let err = InteractionConfig::from_json(r#"{ "grid_size": -5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGridSize(_)));
    }

    #[test]
    fn test_rejects_negative_offset() {
        let err = InteractionConfig::from_json(r#"{ "border_offset": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBorderOffset(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = InteractionConfig::from_json("{ grid_size").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_size": 15.0, "border_offset": 4.0 }}"#).unwrap();

        let config = InteractionConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_size, 15.0);
        assert_eq!(config.border_offset, 4.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
