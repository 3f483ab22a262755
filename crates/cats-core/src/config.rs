//! Configuration System
//!
//! Loads behavioural tuning constants from tuning.toml so they can be
//! adjusted without recompiling. Every section falls back to its defaults,
//! so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level tuning structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub engagement: EngagementConfig,
}

/// Movement probability weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// How strongly laziness pulls toward staying
    pub lazy_weight: f64,
    /// How strongly relationships with present cats attract or repel
    pub relationship_weight: f64,
    /// Multiplicative jitter applied to every option's weight
    pub jitter_min: f64,
    pub jitter_max: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            lazy_weight: 0.1,
            relationship_weight: 0.2,
            jitter_min: 0.9,
            jitter_max: 1.1,
        }
    }
}

/// Engagement resolution parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Pairs with mutual intent above this become candidates
    pub intent_threshold: f64,
    /// Additive jitter range on mutual intent, symmetric around 0
    pub intent_jitter: f64,
    /// Change of relationship value per interaction
    pub relationship_step: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            intent_threshold: 0.2,
            intent_jitter: 0.3,
            relationship_step: 0.05,
        }
    }
}

impl TuningConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    /// Load configuration from path, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Render as a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        if m.jitter_min < 0.0 || m.jitter_min > m.jitter_max {
            return Err(ConfigError::Invalid(format!(
                "movement jitter range {}..{} is not a non-negative ascending range",
                m.jitter_min, m.jitter_max
            )));
        }
        if m.lazy_weight < 0.0 || m.relationship_weight < 0.0 {
            return Err(ConfigError::Invalid("movement weights must not be negative".into()));
        }

        let e = &self.engagement;
        if e.intent_jitter < 0.0 {
            return Err(ConfigError::Invalid("intent jitter must not be negative".into()));
        }
        if !(0.0..=1.0).contains(&e.relationship_step) {
            return Err(ConfigError::Invalid(format!(
                "relationship step {} must be within 0..=1",
                e.relationship_step
            )));
        }
        Ok(())
    }
}

impl FromStr for TuningConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TuningConfig::default();
        assert_eq!(config.movement.lazy_weight, 0.1);
        assert_eq!(config.movement.relationship_weight, 0.2);
        assert_eq!(config.engagement.intent_threshold, 0.2);
        assert_eq!(config.engagement.relationship_step, 0.05);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TuningConfig::from_str("[engagement]\nrelationship_step = 0.1\n").unwrap();
        assert_eq!(config.engagement.relationship_step, 0.1);
        assert_eq!(config.engagement.intent_jitter, 0.3);
        assert_eq!(config.movement, MovementConfig::default());
    }

    #[test]
    fn test_inverted_jitter_rejected() {
        let result = TuningConfig::from_str("[movement]\njitter_min = 1.2\njitter_max = 0.8\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = TuningConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(TuningConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_str() {
        let config: TuningConfig = "[movement]\njitter_max = 1.3\n".parse().unwrap();
        assert_eq!(config.movement.jitter_max, 1.3);
        assert!("[movement]\nlazy_weight = -1.0\n".parse::<TuningConfig>().is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[movement]\nlazy_weight = 0.3").unwrap();

        let config = TuningConfig::load(file.path()).unwrap();
        assert_eq!(config.movement.lazy_weight, 0.3);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = TuningConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config, TuningConfig::default());
    }
}
