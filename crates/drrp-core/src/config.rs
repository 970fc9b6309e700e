//! Engine configuration shared by the library and the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("io error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which government pattern generator the resolver instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternVariant {
    /// Unbounded pre-modal gap, matches end at the modal.
    Legacy,
    /// Capped pre-modal gap plus an `action` capture after the modal.
    #[default]
    Bounded,
}

/// Tunables for one engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Documents longer than this (in chars) are matched through windows.
    pub window_threshold: usize,
    /// Window reach before a modal anchor.
    pub window_before: usize,
    /// Window reach after a modal anchor.
    pub window_after: usize,
    /// Pre-modal gap budget for the bounded variant.
    pub bounded_gap: usize,
    /// Upper bound on refined clause length.
    pub max_clause_chars: usize,
    pub pattern_variant: PatternVariant,
    /// Backtracking step limit per pattern execution.
    pub backtrack_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_threshold: 50_000,
            window_before: 400,
            window_after: 200,
            bounded_gap: 120,
            max_clause_chars: 300,
            pattern_variant: PatternVariant::Bounded,
            backtrack_limit: 1_000_000,
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_clause_chars < 20 {
            return Err(ConfigError::Invalid(format!(
                "max_clause_chars must be at least 20, got {}",
                self.max_clause_chars
            )));
        }
        if self.window_before == 0 || self.window_after == 0 {
            return Err(ConfigError::Invalid(
                "window_before and window_after must be non-zero".to_string(),
            ));
        }
        if self.backtrack_limit == 0 {
            return Err(ConfigError::Invalid("backtrack_limit must be non-zero".to_string()));
        }
        Ok(())
    }
}
