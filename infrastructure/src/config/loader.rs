//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default project-level config file name
const PROJECT_CONFIG_FILE: &str = "pulse.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Read(#[from] Box<figment::Error>),

    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PULSE_`-prefixed environment variables (`PULSE_MARKET__SEED=7`)
    /// 2. Explicit config path (if provided), else `./pulse.toml`
    /// 3. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        match config_path {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let path = PathBuf::from(PROJECT_CONFIG_FILE);
                if path.exists() {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        let config: FileConfig = figment
            .merge(Env::prefixed("PULSE_").split("__"))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;
        Ok(config)
    }

    /// Load only default configuration (for --no-config style callers)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.market.seed.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[market]\nseed = 99\nfailure_rate = 0.25").unwrap();
        writeln!(file, "[output]\ncolor = false").unwrap();

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.market.seed, Some(99));
        assert_eq!(config.market.failure_rate, 0.25);
        assert!(!config.output.color);
    }

    #[test]
    fn test_env_overrides_file_value() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("pulse.toml", "[market]\nseed = 1\nfailure_rate = 0.5")?;
            jail.set_env("PULSE_MARKET__SEED", "9");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.market.seed, Some(9));
            assert_eq!(config.market.failure_rate, 0.5);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_failure_rate_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[market]\nfailure_rate = 2.0").unwrap();

        let err = ConfigLoader::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ncolor = false").unwrap();

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.market.failure_rate, 0.0);
        assert!(!config.output.color);
    }
}
