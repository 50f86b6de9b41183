//! Configuration loading and validation

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, FileConfig, MarketConfig, OutputConfig};
pub use loader::{ConfigError, ConfigLoader};
