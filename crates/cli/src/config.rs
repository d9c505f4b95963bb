//! Application configuration
//!
//! Every field has a default pointing at the working directory, so running
//! without a config file behaves exactly like the fixed-path layout. A TOML
//! file passed with `--config` overrides any subset of the fields.

use anyhow::{Context, Result};
use oncoscore_classifier::ArtifactPaths;
use oncoscore_feedback::{DEFAULT_FEEDBACK_PATH, MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Model, scaler and header image locations
    pub artifacts: ArtifactPaths,
    /// Feedback log location
    pub feedback: FeedbackConfig,
    /// Defaults for the per-session viewer state
    pub session: SessionDefaults,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Feedback log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub path: PathBuf,
}

/// Initial viewer name and rating for a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    pub name: String,
    pub rating: u8,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FEEDBACK_PATH),
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            name: "Anonymous".to_string(),
            rating: MAX_RATING,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to INFO for unknown names
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl AppConfig {
    /// Load from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Collect warnings for settings that load but look wrong
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(MIN_RATING..=MAX_RATING).contains(&self.session.rating) {
            warnings.push(format!(
                "Default rating {} outside {}..={}, submissions will be rejected",
                self.session.rating, MIN_RATING, MAX_RATING
            ));
        }

        if self.session.name.trim().is_empty() {
            warnings.push("Default viewer name is empty".to_string());
        }

        if self.logging.level.parse::<Level>().is_err() {
            warnings.push(format!(
                "Unknown log level '{}', using info",
                self.logging.level
            ));
        }

        if self.feedback.path.extension().and_then(|e| e.to_str()) != Some("csv") {
            warnings.push(format!(
                "Feedback path {} does not end in .csv",
                self.feedback.path.display()
            ));
        }

        for warning in &warnings {
            warn!("{}", warning);
        }
        warnings
    }
}
