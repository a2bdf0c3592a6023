//! Configuration loading for the chromatic analyzer.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/chromatic/config.toml` (system)
//! 2. `~/.config/chromatic/config.toml` (user)
//! 3. `./chromatic.toml` (local override), or a path given on the command line
//! 4. Environment variables (`CHROMATIC_*`, `RUST_LOG`)
//!
//! # Example Config
//!
//! ```toml
//! [analysis]
//! question_size = 4
//!
//! [output]
//! format = "json"
//! show_interpretations = false
//! color = false
//!
//! [telemetry]
//! log_level = "debug"
//! ```

pub mod loader;
pub mod settings;

pub use loader::{discover_config_files_with_override, ConfigSources};
pub use settings::{AnalysisConfig, OutputConfig, OutputFormat, TelemetryConfig};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Largest question that fits in the twelve-tone space.
pub const MAX_QUESTION_SIZE: usize = 12;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChromaConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl ChromaConfig {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration, letting `config_path` replace `./chromatic.toml`.
    ///
    /// A `config_path` that does not exist is an error.
    pub fn load_from(config_path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration from optional path and return information about sources.
    pub fn load_with_sources_from(
        config_path: Option<&std::path::Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        if let Some(path) = config_path {
            let path = loader::expand_path(&path.to_string_lossy());
            if !path.is_file() {
                return Err(ConfigError::FileRead {
                    path,
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "explicit config file not found",
                    ),
                });
            }
        }

        let mut sources = ConfigSources::default();
        let mut config = ChromaConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::load_into(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources)?;
        config.validate()?;

        Ok((config, sources))
    }

    /// Reject values the analyzer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.analysis.question_size;
        if size == 0 || size > MAX_QUESTION_SIZE {
            return Err(ConfigError::Invalid {
                key: "analysis.question_size".to_string(),
                message: format!("{} is outside 1..={}", size, MAX_QUESTION_SIZE),
            });
        }
        Ok(())
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# Chromatic Analyzer Configuration\n\n");

        output.push_str("[analysis]\n");
        output.push_str(&format!(
            "question_size = {}\n",
            self.analysis.question_size
        ));

        output.push_str("\n[output]\n");
        output.push_str(&format!("format = \"{}\"\n", self.output.format));
        output.push_str(&format!(
            "show_interpretations = {}\n",
            self.output.show_interpretations
        ));
        output.push_str(&format!("color = {}\n", self.output.color));

        output.push_str("\n[telemetry]\n");
        output.push_str(&format!(
            "log_level = \"{}\"\n",
            self.telemetry.log_level
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChromaConfig::default();
        assert_eq!(config.analysis.question_size, 4);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_interpretations);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = ChromaConfig::default();
        config.analysis.question_size = 5;
        config.output.format = OutputFormat::Json;
        config.output.color = false;

        let toml = config.to_toml();
        assert!(toml.contains("[analysis]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[telemetry]"));

        let parsed: ChromaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_question_size() {
        let mut config = ChromaConfig::default();
        config.analysis.question_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        config.analysis.question_size = 13;
        assert!(config.validate().is_err());

        config.analysis.question_size = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chromatic.toml");
        std::fs::write(&path, "[analysis]\nquestion_size = 3\n").unwrap();

        let (config, sources) = ChromaConfig::load_with_sources_from(Some(path.as_path())).unwrap();
        assert!(sources.files.contains(&path));
        // Environment may override, but the file value is what we wrote
        if !sources.env_overrides.iter().any(|v| v == "CHROMATIC_QUESTION_SIZE") {
            assert_eq!(config.analysis.question_size, 3);
        }
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.toml");

        let err = ChromaConfig::load_from(Some(missing.as_path()));
        match err {
            Err(ConfigError::FileRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected FileRead, got {:?}", other),
        }
    }
}
