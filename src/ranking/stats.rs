//! Roster completion statistics
//!
//! Tracks how many routines have been scored out of the routines expected
//! for a set of competitors.

use crate::types::Competitor;
use serde::{Deserialize, Serialize};

/// Scoring progress for a set of competitors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStats {
    /// Number of competitors considered
    pub total_competitors: usize,
    /// Scores recorded across all competitors
    pub completed_routines: usize,
    /// Competitors times events
    pub total_routines: usize,
    /// Percentage of expected routines scored (0.0 to 100.0)
    pub completion_rate: f64,
}

impl CompetitionStats {
    /// Compute statistics for competitors contesting `event_count` events
    pub fn compute(competitors: &[Competitor], event_count: usize) -> Self {
        let total_competitors = competitors.len();
        let completed_routines = competitors.iter().map(Competitor::scored_events).sum();
        let total_routines = total_competitors * event_count;

        let completion_rate = if total_routines > 0 {
            (completed_routines as f64 / total_routines as f64) * 100.0
        } else {
            0.0
        };

        Self {
            total_competitors,
            completed_routines,
            total_routines,
            completion_rate,
        }
    }

    /// Whether every expected routine has a score
    pub fn is_complete(&self) -> bool {
        self.total_routines > 0 && self.completed_routines >= self.total_routines
    }
}
