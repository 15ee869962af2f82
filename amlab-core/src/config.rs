//! TOML configuration: sampling settings and initial slider values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SignalError;
use crate::params::AmParams;
use crate::signal::SignalConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Invalid(#[from] SignalError),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub signal: SignalConfig,
    pub defaults: AmParams,
}

impl LabConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else the default location; a missing default
    /// file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.signal.validate()?;
        self.defaults.validate()?;
        Ok(())
    }
}

/// `<config dir>/amlab/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("amlab").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config = LabConfig::from_toml("").unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = LabConfig::from_toml(
            r#"
[signal]
carrier_freq = 40.0

[defaults]
message_amp = 2.5
"#,
        )
        .unwrap();
        assert_eq!(config.signal.carrier_freq, 40.0);
        assert_eq!(config.signal.sample_count, 1000);
        assert_eq!(config.defaults.message_amp, 2.5);
        assert_eq!(config.defaults.carrier_amp, 1.0);
    }

    #[test]
    fn invalid_values_rejected() {
        let err = LabConfig::from_toml("[signal]\ndisplay_window = 5000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(SignalError::InvalidConfig(_))));

        let err = LabConfig::from_toml("[defaults]\ncarrier_amp = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(SignalError::OutOfRange { .. })));

        let err = LabConfig::from_toml("[signal\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = LabConfig::default();
        config.signal.display_window = 250;
        config.defaults.message_freq = 4.5;
        let text = config.to_toml().unwrap();
        assert_eq!(LabConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = LabConfig::from_file(Path::new("/nonexistent/amlab/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[signal]\nsample_count = 500\ndisplay_window = 50\n").unwrap();
        let config = LabConfig::from_file(&path).unwrap();
        assert_eq!(config.signal.sample_count, 500);
        assert_eq!(config.signal.display_window, 50);
    }
}
