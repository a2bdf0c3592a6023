//! Configuration sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How questions are drawn and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of distinct pitch classes per question.
    /// Default: 4
    #[serde(default = "AnalysisConfig::default_question_size")]
    pub question_size: usize,
}

impl AnalysisConfig {
    fn default_question_size() -> usize {
        4
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            question_size: Self::default_question_size(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {:?} (expected text or json)", other)),
        }
    }
}

/// How results are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default: text
    #[serde(default = "OutputConfig::default_format")]
    pub format: OutputFormat,

    /// List every candidate root, not just the winner.
    /// Default: true
    #[serde(default = "OutputConfig::default_true")]
    pub show_interpretations: bool,

    /// Default: true
    #[serde(default = "OutputConfig::default_true")]
    pub color: bool,
}

impl OutputConfig {
    fn default_format() -> OutputFormat {
        OutputFormat::Text
    }

    fn default_true() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
            show_interpretations: true,
            color: true,
        }
    }
}

/// Logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `tracing-subscriber` filter directive.
    /// Default: warn
    #[serde(default = "TelemetryConfig::default_log_level")]
    pub log_level: String,
}

impl TelemetryConfig {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}
