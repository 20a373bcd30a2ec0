//! Configuration management for the scoreboard
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod ranking;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use ranking::RankingSettings;
