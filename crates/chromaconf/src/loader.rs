//! Config file discovery, loading, and environment variable overlay.

use crate::{ChromaConfig, ConfigError, OutputFormat};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files in standard locations.
///
/// Returns paths in load order (system, user, local).
/// Only returns files that exist.
pub fn discover_config_files() -> Vec<PathBuf> {
    discover_config_files_with_override(None)
}

/// Discover config files, optionally with a CLI override path.
///
/// If `cli_path` is provided and exists, it replaces the local override.
/// A missing `cli_path` is skipped here; [`crate::ChromaConfig::load_from`]
/// rejects it before discovery.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/chromatic/config.toml");
    if system.exists() {
        files.push(system);
    }

    // User config (XDG_CONFIG_HOME or ~/.config)
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("chromatic/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        let path = expand_path(&path.to_string_lossy());
        if path.exists() {
            files.push(path);
            return files;
        }
    }

    let local = PathBuf::from("chromatic.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Read a TOML file and layer its values over `config`.
pub fn load_into(config: &mut ChromaConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_toml(config, &contents, path)
}

/// Parse a TOML document on top of the defaults.
pub fn parse_toml(contents: &str, path: &Path) -> Result<ChromaConfig, ConfigError> {
    let mut config = ChromaConfig::default();
    apply_toml(&mut config, contents, path)?;
    Ok(config)
}

/// Overwrite only the keys present in `contents`, so later files refine
/// earlier ones instead of resetting them.
fn apply_toml(config: &mut ChromaConfig, contents: &str, path: &Path) -> Result<(), ConfigError> {
    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let wrong_type = |key: &str, expected: &str| ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("{} must be {}", key, expected),
    };

    if let Some(analysis) = table.get("analysis").and_then(|v| v.as_table()) {
        if let Some(v) = analysis.get("question_size") {
            let size = v
                .as_integer()
                .filter(|n| *n >= 0)
                .ok_or_else(|| wrong_type("analysis.question_size", "a non-negative integer"))?;
            config.analysis.question_size = size as usize;
        }
    }

    if let Some(output) = table.get("output").and_then(|v| v.as_table()) {
        if let Some(v) = output.get("format") {
            let raw = v
                .as_str()
                .ok_or_else(|| wrong_type("output.format", "a string"))?;
            config.output.format = raw.parse().map_err(|message| ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            })?;
        }
        if let Some(v) = output.get("show_interpretations") {
            config.output.show_interpretations = v
                .as_bool()
                .ok_or_else(|| wrong_type("output.show_interpretations", "a boolean"))?;
        }
        if let Some(v) = output.get("color") {
            config.output.color = v
                .as_bool()
                .ok_or_else(|| wrong_type("output.color", "a boolean"))?;
        }
    }

    if let Some(telemetry) = table.get("telemetry").and_then(|v| v.as_table()) {
        if let Some(v) = telemetry.get("log_level") {
            config.telemetry.log_level = v
                .as_str()
                .ok_or_else(|| wrong_type("telemetry.log_level", "a string"))?
                .to_string();
        }
    }

    Ok(())
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(
    config: &mut ChromaConfig,
    sources: &mut ConfigSources,
) -> Result<(), ConfigError> {
    apply_env_from(config, sources, |key| env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_env_from<F>(
    config: &mut ChromaConfig,
    sources: &mut ConfigSources,
    lookup: F,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let invalid = |key: &str, message: String| ConfigError::Invalid {
        key: key.to_string(),
        message,
    };

    if let Some(v) = lookup("CHROMATIC_QUESTION_SIZE") {
        config.analysis.question_size = v
            .trim()
            .parse()
            .map_err(|e| invalid("CHROMATIC_QUESTION_SIZE", format!("{}", e)))?;
        sources.env_overrides.push("CHROMATIC_QUESTION_SIZE".to_string());
    }

    if let Some(v) = lookup("CHROMATIC_OUTPUT_FORMAT") {
        config.output.format = v
            .parse::<OutputFormat>()
            .map_err(|e| invalid("CHROMATIC_OUTPUT_FORMAT", e))?;
        sources.env_overrides.push("CHROMATIC_OUTPUT_FORMAT".to_string());
    }

    if let Some(v) = lookup("CHROMATIC_SHOW_INTERPRETATIONS") {
        config.output.show_interpretations =
            parse_bool(&v).ok_or_else(|| invalid("CHROMATIC_SHOW_INTERPRETATIONS", v.clone()))?;
        sources.env_overrides.push("CHROMATIC_SHOW_INTERPRETATIONS".to_string());
    }

    if let Some(v) = lookup("CHROMATIC_COLOR") {
        config.output.color =
            parse_bool(&v).ok_or_else(|| invalid("CHROMATIC_COLOR", v.clone()))?;
        sources.env_overrides.push("CHROMATIC_COLOR".to_string());
    }
    // NO_COLOR convention: presence disables color
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = false;
        sources.env_overrides.push("NO_COLOR".to_string());
    }

    if let Some(v) = lookup("CHROMATIC_LOG_LEVEL") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("CHROMATIC_LOG_LEVEL".to_string());
    }
    // Also support RUST_LOG
    if let Some(v) = lookup("RUST_LOG") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("RUST_LOG".to_string());
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
