//! Gym Scoreboard - Gymnastics competition scoring and rankings
//!
//! This crate aggregates per-event scores into totals and derives dense rank
//! order, optionally partitioned by competency level.

pub mod config;
pub mod document;
pub mod error;
pub mod events;
pub mod format;
pub mod level;
pub mod ranking;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used types and functions
pub use error::{Result, ScoreboardError};
pub use events::{Event, Section};
pub use level::Level;
pub use ranking::{
    available_levels, compute_total, filter_by_level, group_by_level_and_rank, rank,
    top_per_level, CompetitionStats,
};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
