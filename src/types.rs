//! Common types used throughout the scoreboard

use crate::error::{Result, ScoreboardError};
use crate::events::{Event, Section};
use crate::level::Level;
use crate::validation::validate_score;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for competitors
pub type CompetitorId = String;

/// Identifier of a judged event (e.g. "vault")
pub type EventId = String;

/// A participant and the scores recorded so far.
///
/// Totals and ranks are never stored here; they are derived by the ranking
/// engine into [`RankedCompetitor`]. Stale `totalScore`/`rank` keys in input
/// documents are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub team: String,
    pub level: Level,
    /// Absent key means "not yet scored"
    #[serde(default)]
    pub scores: BTreeMap<EventId, f64>,
}

impl Competitor {
    /// Create a new unscored competitor with a fresh id
    pub fn new(name: impl Into<String>, team: impl Into<String>, level: Level) -> Self {
        Self {
            id: crate::utils::generate_competitor_id(),
            name: name.into(),
            team: team.into(),
            level,
            scores: BTreeMap::new(),
        }
    }

    /// Builder-style score assignment (no validation)
    pub fn with_score(mut self, event_id: impl Into<EventId>, score: f64) -> Self {
        self.scores.insert(event_id.into(), score);
        self
    }

    /// Recorded score for an event, 0 when not yet scored
    pub fn score_for(&self, event_id: &str) -> f64 {
        self.scores.get(event_id).copied().unwrap_or(0.0)
    }

    /// Number of events with a recorded score
    pub fn scored_events(&self) -> usize {
        self.scores.len()
    }
}

/// A competitor together with the values derived by ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCompetitor {
    #[serde(flatten)]
    pub competitor: Competitor,
    pub total_score: f64,
    /// 1-based position; ties still receive distinct ranks
    pub rank: u32,
}

/// Ranked competitors sharing one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGroup {
    pub level: Level,
    pub competitors: Vec<RankedCompetitor>,
}

/// A competition and its roster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub section: Section,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl Competition {
    /// Events contested in this competition
    pub fn events(&self) -> Vec<Event> {
        self.section.events()
    }

    /// Find a competitor by id
    pub fn competitor(&self, competitor_id: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == competitor_id)
    }

    /// Record a validated score for one competitor on one event
    pub fn record_score(&mut self, competitor_id: &str, event_id: &str, score: f64) -> Result<()> {
        let event =
            self.section
                .find_event(event_id)
                .ok_or_else(|| ScoreboardError::UnknownEvent {
                    event_id: event_id.to_string(),
                })?;

        validate_score(score, &event)?;

        let competitor = self
            .competitors
            .iter_mut()
            .find(|c| c.id == competitor_id)
            .ok_or_else(|| ScoreboardError::CompetitorNotFound {
                competitor_id: competitor_id.to_string(),
            })?;

        competitor.scores.insert(event.id, score);
        tracing::debug!(
            "Recorded {:.2} on {} for competitor {}",
            score,
            event_id,
            competitor_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_competition() -> Competition {
        Competition {
            id: "comp-1".to_string(),
            name: "Spring Invitational".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            section: Section::Women,
            competitors: vec![Competitor {
                id: "c1".to_string(),
                name: "Ana".to_string(),
                team: "Riverside".to_string(),
                level: Level::Numbered(5),
                scores: BTreeMap::new(),
            }],
        }
    }

    #[test]
    fn test_score_for_missing_event_is_zero() {
        let competitor = Competitor::new("Ana", "Riverside", Level::Elite).with_score("vault", 9.2);
        assert_eq!(competitor.score_for("vault"), 9.2);
        assert_eq!(competitor.score_for("balance-beam"), 0.0);
        assert_eq!(competitor.scored_events(), 1);
    }

    #[test]
    fn test_new_competitors_get_distinct_ids() {
        let a = Competitor::new("A", "T", Level::Numbered(1));
        let b = Competitor::new("B", "T", Level::Numbered(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_stale_derived_fields_are_ignored() {
        let json = r#"{
            "id": "c9",
            "name": "Mia",
            "team": "North",
            "level": "Level 3",
            "scores": {"vault": 8.5},
            "totalScore": 99.0,
            "rank": 1
        }"#;
        let competitor: Competitor = serde_json::from_str(json).unwrap();
        assert_eq!(competitor.level, Level::Numbered(3));
        assert_eq!(competitor.score_for("vault"), 8.5);
    }

    #[test]
    fn test_ranked_competitor_flattens() {
        let ranked = RankedCompetitor {
            competitor: Competitor::new("Ana", "Riverside", Level::Elite),
            total_score: 0.0,
            rank: 1,
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["totalScore"], 0.0);
        assert_eq!(json["rank"], 1);
    }

    #[test]
    fn test_record_score() {
        let mut competition = sample_competition();
        competition.record_score("c1", "vault", 9.35).unwrap();
        assert_eq!(competition.competitor("c1").unwrap().score_for("vault"), 9.35);

        // Overwrites previous value
        competition.record_score("c1", "vault", 9.4).unwrap();
        assert_eq!(competition.competitor("c1").unwrap().score_for("vault"), 9.4);
    }

    #[test]
    fn test_record_score_rejects_bad_input() {
        let mut competition = sample_competition();

        let err = competition.record_score("c1", "pommel-horse", 9.0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScoreboardError>(),
            Some(&ScoreboardError::UnknownEvent {
                event_id: "pommel-horse".to_string()
            })
        );

        let err = competition.record_score("nobody", "vault", 9.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScoreboardError>(),
            Some(ScoreboardError::CompetitorNotFound { .. })
        ));

        let err = competition.record_score("c1", "vault", 10.5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScoreboardError>(),
            Some(ScoreboardError::InvalidScore { .. })
        ));

        assert!(competition.competitor("c1").unwrap().scores.is_empty());
    }
}
