//! Score aggregation and rank derivation
//!
//! This module turns per-event scores into totals and dense rank order,
//! optionally partitioned by competency level, plus roster completion stats.

pub mod engine;
pub mod stats;

// Re-export commonly used functions
pub use engine::{
    available_levels, compute_total, filter_by_level, group_by_level_and_rank, rank,
    top_per_level,
};
pub use stats::CompetitionStats;
