//! Entry-time checks for scores and competitor records
//!
//! These run before data reaches the ranking engine. The engine itself does
//! not re-validate and sums whatever scores it is given.

use crate::error::ScoreboardError;
use crate::events::Event;
use crate::level::Level;

/// Check that a score is finite and within `0..=event.max_score`
pub fn validate_score(score: f64, event: &Event) -> Result<(), ScoreboardError> {
    if !score.is_finite() || score < 0.0 || score > event.max_score {
        return Err(ScoreboardError::InvalidScore {
            event_id: event.id.clone(),
            score,
            max_score: event.max_score,
        });
    }
    Ok(())
}

/// Check the fields of a new competitor, reporting every problem found
pub fn validate_competitor(name: &str, team: &str, level: &str) -> Result<Level, ScoreboardError> {
    let mut reasons = Vec::new();

    if name.trim().is_empty() {
        reasons.push("Name is required".to_string());
    }
    if team.trim().is_empty() {
        reasons.push("Team is required".to_string());
    }

    let level = level.trim();
    let parsed = Level::parse(level);
    if level.is_empty() {
        reasons.push("Level is required".to_string());
    } else if !parsed.is_standard() {
        reasons.push(format!(
            "Invalid level: {}. Must be Level 1-10 or Elite",
            level
        ));
    }

    if reasons.is_empty() {
        Ok(parsed)
    } else {
        Err(ScoreboardError::InvalidCompetitor { reasons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Section;

    fn vault() -> Event {
        Section::Women.find_event("vault").unwrap()
    }

    #[test]
    fn test_score_bounds_inclusive() {
        assert!(validate_score(0.0, &vault()).is_ok());
        assert!(validate_score(10.0, &vault()).is_ok());
        assert!(validate_score(9.575, &vault()).is_ok());
    }

    #[test]
    fn test_score_out_of_range() {
        assert!(validate_score(-0.1, &vault()).is_err());
        assert!(validate_score(10.01, &vault()).is_err());
        assert!(validate_score(f64::NAN, &vault()).is_err());
        assert!(validate_score(f64::INFINITY, &vault()).is_err());

        let err = validate_score(11.0, &vault()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid score for vault: 11 (must be between 0 and 10)"
        );
    }

    #[test]
    fn test_valid_competitor() {
        let level = validate_competitor("Jane Smith", "Elite Academy", "Level 7").unwrap();
        assert_eq!(level, Level::Numbered(7));

        let level = validate_competitor("John", "Club", " Elite ").unwrap();
        assert_eq!(level, Level::Elite);
    }

    #[test]
    fn test_invalid_competitor_collects_all_reasons() {
        let err = validate_competitor("  ", "", "").unwrap_err();
        match err {
            ScoreboardError::InvalidCompetitor { reasons } => {
                assert_eq!(
                    reasons,
                    vec!["Name is required", "Team is required", "Level is required"]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_competitor_with_unknown_level() {
        let err = validate_competitor("John", "Club", "Level 12").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid competitor: Invalid level: Level 12. Must be Level 1-10 or Elite"
        );
    }
}
