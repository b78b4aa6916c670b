//! Dashboard configuration. Every section falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SundusConfig {
    /// External JSON scenario file; built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Severity tier thresholds
    pub tiers: TiersConfig,
    /// Random event generation
    pub generator: GeneratorConfig,
    /// Virtual sandbox self-check
    pub sandbox: SandboxConfig,
    /// Terminal rendering
    pub render: RenderConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TiersConfig {
    /// Severity strictly above this is at least CAUTION
    pub caution_threshold: f64,
    /// Severity strictly above this is CRITICAL
    pub critical_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Half-width of the uniform jitter added to base severity
    pub jitter: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Events generated for the rapid-fire check
    pub batch_size: usize,
    pub low_scenario: String,
    pub high_scenario: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Ring the terminal bell when an alert carries an audio cue
    pub bell: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            caution_threshold: 0.4,
            critical_threshold: 0.7,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { jitter: 0.05 }
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            batch_size: 50,
            low_scenario: "C-01".to_string(),
            high_scenario: "H-03".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TiersConfig {
    /// Both thresholds finite and caution strictly below critical
    pub fn is_valid(&self) -> bool {
        self.caution_threshold.is_finite()
            && self.critical_threshold.is_finite()
            && self.caution_threshold < self.critical_threshold
    }
}

impl GeneratorConfig {
    pub const MAX_JITTER: f64 = 1.0;

    pub fn is_valid(&self) -> bool {
        self.jitter.is_finite() && self.jitter.abs() <= Self::MAX_JITTER
    }
}

impl SundusConfig {
    /// Parse the JSON file. A missing file is the default config, not an error.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            warn!(error = %e, "config ignored, using defaults");
            Self::default()
        })
    }
}
