//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. They
//! cover output preferences and the simulated sources only — scoring
//! thresholds and the insight-length minimum are algorithm constants, not
//! configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("market.failure_rate must be between 0.0 and 1.0")]
    InvalidFailureRate,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Simulated source behavior
    pub market: MarketConfig,
    /// Output preferences
    pub output: OutputConfig,
}

impl FileConfig {
    /// Validate cross-field constraints after deserialization
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.market.failure_rate) {
            return Err(ConfigValidationError::InvalidFailureRate);
        }
        Ok(())
    }
}

/// Simulated market/insight source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Seed for deterministic simulation; unset draws fresh entropy
    pub seed: Option<u64>,
    /// Share of fetches that fail, for exercising degraded paths
    pub failure_rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            seed: None,
            failure_rate: 0.0,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.market.seed.is_none());
        assert_eq!(config.market.failure_rate, 0.0);
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_failure_rate_bounds() {
        let mut config = FileConfig::default();
        config.market.failure_rate = 1.0;
        assert!(config.validate().is_ok());

        config.market.failure_rate = 1.5;
        assert!(config.validate().is_err());

        config.market.failure_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let config: FileConfig = toml::from_str("[market]\nseed = 7\n").unwrap();
        assert_eq!(config.market.seed, Some(7));
        assert_eq!(config.market.failure_rate, 0.0);
        assert!(config.output.color);
    }
}
