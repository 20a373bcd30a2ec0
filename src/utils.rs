//! Utility functions for the scoreboard

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique competitor ID
pub fn generate_competitor_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}
