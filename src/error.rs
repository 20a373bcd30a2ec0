//! Error types for the scoreboard
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application. Ranking itself never fails; these errors come from
//! score entry, competitor validation and configuration loading.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific scoring scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreboardError {
    #[error("Invalid score for {event_id}: {score} (must be between 0 and {max_score})")]
    InvalidScore {
        event_id: String,
        score: f64,
        max_score: f64,
    },

    #[error("Unknown event: {event_id}")]
    UnknownEvent { event_id: String },

    #[error("Competitor not found: {competitor_id}")]
    CompetitorNotFound { competitor_id: String },

    #[error("Invalid competitor: {}", reasons.join("; "))]
    InvalidCompetitor { reasons: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
