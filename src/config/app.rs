//! Main application configuration
//!
//! This module defines the primary configuration structures for the scoreboard,
//! including environment variable loading, TOML file loading and validation.

use crate::config::ranking::RankingSettings;
use crate::error::ScoreboardError;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub ranking: RankingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "gym-scoreboard".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(podium) = env::var("PODIUM_SIZE") {
            self.ranking.podium_size = podium
                .parse()
                .map_err(|_| anyhow!("Invalid PODIUM_SIZE value: {}", podium))?;
        }
        if let Ok(section) = env::var("DEFAULT_SECTION") {
            self.ranking.default_section = section
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_SECTION value: {}", section))?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(ScoreboardError::ConfigurationError {
                message: format!("Invalid log level: {}", config.service.log_level),
            }
            .into())
        }
    }

    if config.service.name.is_empty() {
        return Err(ScoreboardError::ConfigurationError {
            message: "Service name cannot be empty".to_string(),
        }
        .into());
    }

    if config.ranking.podium_size == 0 {
        return Err(ScoreboardError::ConfigurationError {
            message: "Podium size must be greater than 0".to_string(),
        }
        .into());
    }

    Ok(())
}
